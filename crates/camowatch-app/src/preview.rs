use std::path::PathBuf;

use camowatch_core::monitor::{Frame, PreviewSink};

/// Writes the latest frame as a PNG snapshot. The monitor loop already
/// throttles how often this is called; failures are logged and swallowed
/// so preview trouble can never affect detection.
pub struct PngPreview {
    path: PathBuf,
}

impl PngPreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewSink for PngPreview {
    fn render(&mut self, frame: &Frame) {
        if let Err(e) = frame.save(&self.path) {
            tracing::warn!("preview snapshot write failed: {e}");
        }
    }
}
