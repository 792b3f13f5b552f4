mod capture;
mod ocr;

pub use capture::{MonitorInfo, XcapFrameSource, list_monitors};
pub use ocr::{TesseractExtractor, split_lines};
