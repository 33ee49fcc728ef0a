//! Terminal output formatting.
//!
//! Status lines go to stdout or stderr with optional colour; resolved data
//! is printed uncoloured so it can be piped.

pub mod colors;
pub mod errors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print machine-readable output verbatim
    pub fn data(&self, text: &str) {
        println!("{}", text);
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
