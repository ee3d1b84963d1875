use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const LINES: usize = 2;
const CHARS_PER_LINE: usize = 32;

pub struct DeviceDisplayConsole {
    display_buffer: [[char; CHARS_PER_LINE]; LINES],
    frames_drawn: usize,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; CHARS_PER_LINE]; LINES],
            frames_drawn: 0,
        }
    }

    fn render_display(&mut self) {
        self.frames_drawn += 1;
        let border = "─".repeat(CHARS_PER_LINE);
        println!("┌{}┐", border);
        for row in &self.display_buffer {
            let text: String = row.iter().collect();
            println!("│{}│", text);
        }
        println!("└{}┘", border);
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = [[' '; CHARS_PER_LINE]; LINES];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line as usize >= LINES {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line as usize] = [' '; CHARS_PER_LINE];

        for (i, c) in text.chars().take(CHARS_PER_LINE).enumerate() {
            self.display_buffer[line as usize][i] = c;
        }

        Ok(())
    }

    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn num_lines(&self) -> u8 {
        LINES as u8
    }
}
