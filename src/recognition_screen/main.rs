use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::recognition_screen::core::{init, transition, Effect, ImageRequest, Model, Msg};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub type ScreenError = Box<dyn std::error::Error + Send + Sync>;

/// Picks images, classifies them one at a time and shows the result.
#[derive(Clone)]
pub struct RecognitionScreen {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    /// Shared with effect threads; the mutex serializes `classify` calls.
    pub image_classifier: Arc<Mutex<dyn ImageClassifier + Send>>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl RecognitionScreen {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<Mutex<dyn ImageClassifier + Send>>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("recognition_screen"),
            device_camera,
            device_display,
            image_classifier,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    pub fn send(&self, msg: Msg) {
        if self.msg_sender.send(msg).is_err() {
            let _ = self.logger.error("Screen loop is gone, dropping message");
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    /// Runs until every request has been shown, returning the final model.
    pub fn run(&self, requests: Vec<ImageRequest>) -> Result<Model, ScreenError> {
        let (mut current_model, effects) = init(requests);
        self.render(&current_model)?;
        self.spawn_effects(effects);

        let receiver = self
            .msg_receiver
            .lock()
            .map_err(|e| format!("message queue poisoned: {}", e))?;

        loop {
            let msg = receiver.recv()?;

            let _ = self.logger.info(&format!("msg: {}", msg.to_display_string()));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "screen: {:?}, effects: {:?}",
                new_model.screen,
                effects
                    .iter()
                    .map(Effect::to_display_string)
                    .collect::<Vec<_>>()
            ));

            current_model = new_model;
            self.render(&current_model)?;

            if effects.iter().any(|effect| matches!(effect, Effect::Exit)) {
                return Ok(current_model);
            }

            self.spawn_effects(effects);
        }
    }
}
