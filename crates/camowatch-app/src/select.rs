//! Operator-facing region selection. Short-lived glue that yields one
//! immutable `CaptureRegion` before monitoring starts; no detection state
//! lives here.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use camowatch_types::CaptureRegion;

/// Parse a `X,Y,WxH` region spec, e.g. `100,200,640x120`.
pub fn parse_region(spec: &str) -> Result<CaptureRegion> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let [x, y, size] = parts.as_slice() else {
        bail!("expected X,Y,WxH, got '{spec}'");
    };
    let (width, height) = size
        .split_once('x')
        .with_context(|| format!("expected WxH size, got '{size}'"))?;

    let region = CaptureRegion {
        x: x.parse().with_context(|| format!("bad x '{x}'"))?,
        y: y.parse().with_context(|| format!("bad y '{y}'"))?,
        width: width
            .trim()
            .parse()
            .with_context(|| format!("bad width '{width}'"))?,
        height: height
            .trim()
            .parse()
            .with_context(|| format!("bad height '{height}'"))?,
    };
    if region.width == 0 || region.height == 0 {
        bail!("region width and height must be positive");
    }
    Ok(region)
}

/// Prompt for a monitor and an optional region within it. Returns the
/// region in absolute screen coordinates.
pub fn choose_region(monitor_index: Option<usize>) -> Result<Option<CaptureRegion>> {
    let monitors = camowatch_ocr::list_monitors()?;
    if monitors.is_empty() {
        bail!("no monitors detected");
    }

    let index = match monitor_index {
        Some(index) => index,
        None => {
            println!("Available monitors:");
            for m in &monitors {
                println!(
                    "  {}: {} at ({}, {}) {}x{}",
                    m.index, m.name, m.x, m.y, m.width, m.height
                );
            }
            let input = prompt("Monitor index [0]: ")?;
            if input.is_empty() {
                0
            } else {
                input
                    .parse()
                    .with_context(|| format!("bad monitor index '{input}'"))?
            }
        }
    };
    let Some(monitor) = monitors.get(index) else {
        bail!("monitor index {index} out of range (0..{})", monitors.len());
    };

    let input = prompt("Region within the monitor as X,Y,WxH (empty = whole monitor): ")?;
    if input.is_empty() {
        return Ok(Some(CaptureRegion {
            x: monitor.x,
            y: monitor.y,
            width: monitor.width,
            height: monitor.height,
        }));
    }

    let relative = parse_region(&input)?;
    Ok(Some(CaptureRegion {
        x: monitor.x + relative.x,
        y: monitor.y + relative.y,
        width: relative.width,
        height: relative.height,
    }))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_region_spec() {
        let region = parse_region("100,200,640x120").unwrap();
        assert_eq!(region.x, 100);
        assert_eq!(region.y, 200);
        assert_eq!(region.width, 640);
        assert_eq!(region.height, 120);
    }

    #[test]
    fn accepts_negative_origins() {
        let region = parse_region("-1920, 0, 1920x1080").unwrap();
        assert_eq!(region.x, -1920);
        assert_eq!(region.width, 1920);
    }

    #[test]
    fn rejects_zero_sized_regions() {
        assert!(parse_region("0,0,0x100").is_err());
        assert!(parse_region("0,0,100x0").is_err());
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_region("").is_err());
        assert!(parse_region("10,20").is_err());
        assert!(parse_region("10,20,abcx100").is_err());
        assert!(parse_region("10,20,100").is_err());
    }
}
