use anyhow::{Context, Result};
use camowatch_core::monitor::{Frame, TextExtractor};
use image::GrayImage;
use image::imageops;
use tesseract::Tesseract;

/// Tesseract-backed text extraction.
///
/// Frames are reduced to a single intensity channel before recognition.
/// The page segmentation mode is part of the contract, not a tuning knob:
/// the watched region holds short isolated strings, and full-page layout
/// analysis loses them (the default, mode 6, treats the image as one
/// uniform block of text).
pub struct TesseractExtractor {
    language: String,
    psm: u32,
    datapath: Option<String>,
}

impl TesseractExtractor {
    pub fn new(language: &str, psm: u32, datapath: Option<String>) -> Self {
        Self {
            language: language.to_string(),
            psm,
            datapath,
        }
    }

    fn recognize(&self, gray: &GrayImage) -> Result<String> {
        let width = gray.width() as i32;
        let height = gray.height() as i32;

        Tesseract::new(self.datapath.as_deref(), Some(&self.language))
            .context("Failed to initialize Tesseract")?
            .set_variable("tessedit_pageseg_mode", &self.psm.to_string())
            .context("Failed to set page segmentation mode")?
            .set_frame(gray.as_raw(), width, height, 1, width)
            .context("Failed to hand frame to Tesseract")?
            .get_text()
            .context("Text recognition failed")
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract(&mut self, frame: &Frame) -> Vec<String> {
        let gray = imageops::grayscale(frame);
        match self.recognize(&gray) {
            Ok(text) => split_lines(&text),
            Err(e) => {
                // An engine fault on one frame must not kill the loop.
                tracing::warn!("OCR fault, treating frame as empty: {e:#}");
                Vec::new()
            }
        }
    }
}

/// Split raw engine output on line boundaries and trim each line. Empty
/// lines are kept; filtering is the keyword filter's job.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_but_not_dropped() {
        let raw = "  New Camo Unlocked: Gold  \n\n\tWeapon Equipped\n";
        assert_eq!(
            split_lines(raw),
            vec!["New Camo Unlocked: Gold", "", "Weapon Equipped"]
        );
    }

    #[test]
    fn empty_output_yields_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn grayscale_preserves_frame_dimensions() {
        let frame = Frame::new(31, 7);
        let gray = imageops::grayscale(&frame);
        assert_eq!(gray.dimensions(), (31, 7));
    }
}
