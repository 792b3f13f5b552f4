use std::env;

use serde::{Deserialize, Serialize};

use self::detection::DetectionConfig;
use self::ocr::OcrConfig;
use self::preview::PreviewConfig;

pub mod detection;
pub mod ocr;
pub mod preview;

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub detection: DetectionConfig,
    pub preview: PreviewConfig,
}

impl Config {
    /// Defaults layered with environment-variable overrides.
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(keyword) = env::var("CAMOWATCH_KEYWORD") {
            if !keyword.is_empty() {
                config.detection.keyword = keyword;
            }
        }

        if let Some(ms) = env::var("DETECTION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.detection.detection_timeout_ms = ms;
        }

        if let Some(ms) = env::var("POLL_DELAY_MS").ok().and_then(|v| v.parse().ok()) {
            config.detection.poll_delay_ms = ms;
        }

        if let Some(ms) = env::var("PREVIEW_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.preview.interval_ms = ms;
        }

        if let Ok(lang) = env::var("CAMOWATCH_OCR_LANG") {
            if !lang.is_empty() {
                config.ocr.language = lang;
            }
        }

        if let Some(psm) = env::var("CAMOWATCH_OCR_PSM")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.ocr.psm = psm;
        }

        if let Ok(path) = env::var("CAMOWATCH_TESSDATA") {
            if !path.is_empty() {
                config.ocr.datapath = Some(path);
            }
        }

        config
    }
}
