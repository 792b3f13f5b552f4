use anyhow::{Context, Result};
use camowatch_core::error::CaptureError;
use camowatch_core::monitor::{Frame, FrameSource};
use camowatch_types::CaptureRegion;
use xcap::Monitor;

#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub index: usize,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// List all available monitors with their geometry
pub fn list_monitors() -> Result<Vec<MonitorInfo>> {
    let monitors = Monitor::all().context("Failed to enumerate monitors")?;
    Ok(monitors
        .iter()
        .enumerate()
        .map(|(index, m)| MonitorInfo {
            index,
            name: m.name().to_string(),
            x: m.x(),
            y: m.y(),
            width: m.width(),
            height: m.height(),
        })
        .collect())
}

/// Screen-capture frame source backed by xcap.
///
/// With a region, captures the monitor containing it and crops; without
/// one, captures the whole primary monitor. A failed grab is transient
/// (`Ok(None)`); failing to enumerate any monitor is a broken handle.
pub struct XcapFrameSource {
    region: Option<CaptureRegion>,
}

impl XcapFrameSource {
    pub fn new(region: Option<CaptureRegion>) -> Self {
        Self { region }
    }
}

impl FrameSource for XcapFrameSource {
    fn capture(&mut self) -> Result<Option<Frame>, CaptureError> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Backend(e.to_string()))?;

        let monitor = match self.region {
            Some(region) => monitors
                .iter()
                .find(|m| {
                    region.x >= m.x()
                        && region.y >= m.y()
                        && region.x + region.width as i32 <= m.x() + m.width() as i32
                        && region.y + region.height as i32 <= m.y() + m.height() as i32
                })
                .or(monitors.first()),
            None => monitors.first(),
        };
        let Some(monitor) = monitor else {
            return Err(CaptureError::NoMonitor);
        };

        let image = match monitor.capture_image() {
            Ok(image) => image,
            Err(e) => {
                tracing::debug!("frame not ready: {e}");
                return Ok(None);
            }
        };

        let image = match self.region {
            Some(region) => {
                let x = (region.x - monitor.x()).max(0) as u32;
                let y = (region.y - monitor.y()).max(0) as u32;
                let width = region.width.min(monitor.width().saturating_sub(x));
                let height = region.height.min(monitor.height().saturating_sub(y));
                if width == 0 || height == 0 {
                    tracing::debug!("capture region falls outside the monitor");
                    return Ok(None);
                }
                xcap::image::imageops::crop_imm(&image, x, y, width, height).to_image()
            }
            None => image,
        };

        Ok(rgba_to_rgb(image))
    }
}

fn rgba_to_rgb(image: xcap::image::RgbaImage) -> Option<Frame> {
    let (width, height) = (image.width(), image.height());
    let raw = image.into_raw();
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for pixel in raw.chunks_exact(4) {
        data.extend_from_slice(&pixel[..3]);
    }
    Frame::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_to_rgb_drops_the_alpha_channel() {
        let rgba = xcap::image::RgbaImage::from_pixel(2, 2, xcap::image::Rgba([10, 20, 30, 255]));
        let frame = rgba_to_rgb(rgba).unwrap();
        assert_eq!(frame.dimensions(), (2, 2));
        assert_eq!(frame.get_pixel(1, 1).0, [10, 20, 30]);
    }
}
