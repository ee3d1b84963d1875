use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

const CHARS_PER_LINE: usize = 32;

/// Keeps the line buffer and every frame shown, for assertions.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    lines: Arc<Mutex<Vec<String>>>,
    frames: Arc<Mutex<Vec<Vec<String>>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(vec![String::new(); 2])),
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn frames(&self) -> Vec<Vec<String>> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().map_err(|e| e.to_string())?;
        lines.iter_mut().for_each(String::clear);
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut lines = self.lines.lock().map_err(|e| e.to_string())?;
        let slot = lines
            .get_mut(line as usize)
            .ok_or("Invalid line number")?;
        *slot = text.chars().take(CHARS_PER_LINE).collect();
        Ok(())
    }

    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = self.lines.lock().map_err(|e| e.to_string())?.clone();
        self.frames.lock().map_err(|e| e.to_string())?.push(lines);
        Ok(())
    }
}
