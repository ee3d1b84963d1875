use crate::config::Config;
use crate::image_classifier::error::InferenceError;
use crate::image_classifier::interface::Classification;
use image::DynamicImage;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRequest {
    Gallery(PathBuf),
    Camera,
}

impl ImageRequest {
    pub fn to_display_string(&self) -> String {
        match self {
            ImageRequest::Gallery(path) => match path.file_name() {
                Some(name) => format!("gallery: {}", name.to_string_lossy()),
                None => format!("gallery: {}", path.display()),
            },
            ImageRequest::Camera => "camera".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Prompt,
    Processing { request: ImageRequest },
    Showing { classification: Classification },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub pending: VecDeque<ImageRequest>,
    pub screen: Screen,
}

#[derive(Debug)]
pub enum Msg {
    Next,
    ImageAcquired(Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>),
    ClassifyDone(Result<Classification, InferenceError>),
}

impl Msg {
    pub fn to_display_string(&self) -> String {
        match self {
            Msg::ImageAcquired(Ok(image)) => {
                format!("ImageAcquired(Ok({}x{}))", image.width(), image.height())
            }
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug)]
pub enum Effect {
    Advance { after: Duration },
    AcquireImage { request: ImageRequest },
    ClassifyImage { image: DynamicImage },
    Exit,
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { image } => {
                format!("ClassifyImage({}x{})", image.width(), image.height())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(requests: Vec<ImageRequest>) -> (Model, Vec<Effect>) {
    (
        Model {
            pending: requests.into(),
            screen: Screen::Prompt,
        },
        vec![Effect::Advance {
            after: Duration::ZERO,
        }],
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let hold = Effect::Advance {
        after: config.result_hold,
    };

    match (model.screen.clone(), msg) {
        (_, Msg::Next) => {
            let mut pending = model.pending;
            match pending.pop_front() {
                Some(request) => (
                    Model {
                        pending,
                        screen: Screen::Processing {
                            request: request.clone(),
                        },
                    },
                    vec![Effect::AcquireImage { request }],
                ),
                None => (
                    Model {
                        pending,
                        screen: Screen::Prompt,
                    },
                    vec![Effect::Exit],
                ),
            }
        }

        (Screen::Processing { .. }, Msg::ImageAcquired(Ok(image))) => {
            (model, vec![Effect::ClassifyImage { image }])
        }
        (Screen::Processing { .. }, Msg::ImageAcquired(Err(e))) => (
            Model {
                pending: model.pending,
                screen: Screen::Failed {
                    message: format!("could not load image: {}", e),
                },
            },
            vec![hold],
        ),

        (Screen::Processing { .. }, Msg::ClassifyDone(Ok(classification))) => (
            Model {
                pending: model.pending,
                screen: Screen::Showing { classification },
            },
            vec![hold],
        ),
        (Screen::Processing { .. }, Msg::ClassifyDone(Err(e))) => (
            Model {
                pending: model.pending,
                screen: Screen::Failed {
                    message: e.to_string(),
                },
            },
            vec![hold],
        ),

        // Results arriving outside of Processing are stale.
        _ => (model, vec![]),
    }
}
