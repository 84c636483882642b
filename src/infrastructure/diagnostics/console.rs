//! Console warning sink.

use crate::domain::ports::warning_sink::{Warning, WarningSink};

/// Writes warnings to stderr, keeping stdout clean for command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl WarningSink for ConsoleSink {
    fn warn(&self, warning: &Warning) {
        eprintln!("⚠ {warning}");
    }
}
