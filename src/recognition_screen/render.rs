use crate::image_classifier::interface::Classification;
use crate::recognition_screen::core::{Model, Screen};
use crate::recognition_screen::main::{RecognitionScreen, ScreenError};

/// `"Onion (70%)"`; the percentage is truncated, not rounded.
pub fn format_classification(classification: &Classification) -> String {
    format!(
        "{} ({}%)",
        classification.label,
        (classification.confidence * 100.0) as i32
    )
}

pub fn render_lines(model: &Model) -> [String; 2] {
    match &model.screen {
        Screen::Prompt => [
            "Select or capture an image".to_string(),
            "to recognize the fruit".to_string(),
        ],
        Screen::Processing { request } => {
            ["Recognizing...".to_string(), request.to_display_string()]
        }
        Screen::Showing { classification } => [
            "Detected fruit".to_string(),
            format_classification(classification),
        ],
        Screen::Failed { message } => ["Error:".to_string(), message.clone()],
    }
}

impl RecognitionScreen {
    pub fn render(&self, model: &Model) -> Result<(), ScreenError> {
        let mut device_display = self
            .device_display
            .lock()
            .map_err(|e| format!("display lock poisoned: {}", e))?;

        device_display.clear()?;
        let num_lines = device_display.num_lines() as usize;
        for (line, text) in render_lines(model).iter().take(num_lines).enumerate() {
            device_display.write_line(line as u8, text)?;
        }

        device_display.show()
    }
}
