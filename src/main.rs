use clap::Parser;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::interface::DeviceDisplay;
use image_classifier::classifier::Classifier;
use image_classifier::engine::impl_fake::InferenceEngineFake;
use image_classifier::error::ModelLoadError;
use image_classifier::interface::ImageClassifier;
use image_classifier::labels::LabelSet;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use recognition_screen::core::ImageRequest;
use recognition_screen::main::RecognitionScreen;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod config;
mod device_camera;
mod device_display;
mod gallery;
mod image_classifier;
mod library;
mod recognition_screen;

#[derive(Parser, Debug)]
#[command(
    name = "fruit-classifier",
    about = "Recognize fruit in pictures with a pre-trained image classifier"
)]
struct Cli {
    /// ONNX model file
    #[arg(long, env = "FRUIT_CLASSIFIER_MODEL")]
    model: Option<PathBuf>,

    /// Number of pictures to take with the camera after the gallery images
    #[arg(long, default_value_t = 0)]
    camera: usize,

    /// Skip the model file and answer every picture with these scores,
    /// one per label, comma separated
    #[arg(long, value_delimiter = ',')]
    fake_scores: Option<Vec<f32>>,

    /// Seconds a result stays on screen
    #[arg(long)]
    hold_secs: Option<u64>,

    /// Pictures to classify
    images: Vec<PathBuf>,
}

fn load_classifier(
    config: &Config,
    fake_scores: Option<Vec<f32>>,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<Mutex<dyn ImageClassifier + Send>>, ModelLoadError> {
    match fake_scores {
        Some(scores) => {
            let _ = logger.info("Using fixed scores instead of a model file");
            let engine = InferenceEngineFake::new(config.model.input_shape, scores);
            let labels = LabelSet::new(config.model.labels.clone())?;
            Ok(Arc::new(Mutex::new(Classifier::new(engine, labels, logger)?)))
        }
        None => Ok(Arc::new(Mutex::new(Classifier::load(&config.model, logger)?))),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(model_path) = cli.model {
        config.model.model_path = model_path;
    }
    if let Some(hold_secs) = cli.hold_secs {
        config.result_hold = Duration::from_secs(hold_secs);
    }

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let image_classifier = match load_classifier(&config, cli.fake_scores, logger.clone()) {
        Ok(image_classifier) => image_classifier,
        Err(e) => {
            let _ = logger.error(&format!("Model failed to load: {}", e));
            if let Ok(mut display) = device_display.lock() {
                display.clear()?;
                display.write_line(0, "Model failed to load")?;
                display.write_line(1, &e.to_string())?;
                display.show()?;
            }
            return Err(e.into());
        }
    };

    let device_camera = Arc::new(DeviceCameraFake::new(
        config.camera.clone(),
        logger.clone(),
    ));

    let recognition_screen = RecognitionScreen::new(
        config,
        logger.clone(),
        device_camera,
        device_display,
        image_classifier.clone(),
    );

    let requests: Vec<ImageRequest> = cli
        .images
        .into_iter()
        .map(ImageRequest::Gallery)
        .chain(std::iter::repeat(ImageRequest::Camera).take(cli.camera))
        .collect();

    let result = recognition_screen.run(requests);

    if let Ok(mut image_classifier) = image_classifier.lock() {
        if image_classifier.is_loaded() {
            image_classifier.release();
        }
    }

    result?;

    Ok(())
}
