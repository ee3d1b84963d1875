use std::error::Error;

/// A small fixed-size text screen. `clear` and `write_line` only touch the
/// buffer; nothing reaches the screen until `show`.
pub trait DeviceDisplay: Send + Sync {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Text longer than a line is truncated.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        2
    }
}
