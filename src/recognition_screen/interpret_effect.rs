use crate::gallery::load_image;
use crate::image_classifier::error::InferenceError;
use crate::recognition_screen::core::{Effect, ImageRequest, Msg};
use crate::recognition_screen::main::RecognitionScreen;

impl RecognitionScreen {
    pub fn interpret_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::Advance { after } => {
                std::thread::sleep(after);
                self.send(Msg::Next);
            }
            Effect::AcquireImage { request } => {
                let image = match request {
                    ImageRequest::Gallery(path) => load_image(&path),
                    ImageRequest::Camera => self.device_camera.capture(),
                };
                self.send(Msg::ImageAcquired(image));
            }
            Effect::ClassifyImage { image } => {
                let classification = match self.image_classifier.lock() {
                    Ok(mut image_classifier) => image_classifier.classify(&image),
                    Err(_) => Err(InferenceError::Engine(
                        "classifier lock poisoned".to_string(),
                    )),
                };
                self.send(Msg::ClassifyDone(classification));
            }
            Effect::Exit => {}
        }
    }
}
