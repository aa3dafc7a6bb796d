use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

const CONVERT: &str = "convert";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatermarkReport {
    pub marked: usize,
    pub failed: usize,
}

/// ImageMagick invocation that lays a translucent text banner across the
/// middle of the image and overwrites the file in place.
pub fn watermark_command(path: &Path, width: u32, height: u32, text: &str) -> Command {
    let mut command = Command::new(CONVERT);
    command
        .args(["-background", "#0008", "-fill", "LightGray", "-gravity", "center"])
        .arg("-size")
        .arg(format!("{}x{}", width, height / 8))
        .arg("-pointsize")
        .arg((height / 20).max(1).to_string())
        .args(["-family", "DejaVu Sans"])
        .arg(format!("label:{}", text))
        .arg(path)
        .args(["+swap", "-gravity", "center", "-composite"])
        .arg(path);
    command
}

pub fn watermark_image(path: &Path, text: &str) -> Result<()> {
    let (width, height) = image::image_dimensions(path)?;
    let status = watermark_command(path, width, height, text).status()?;
    if !status.success() {
        return Err(Error::Watermark(format!(
            "{} exited with {} for {}",
            CONVERT,
            status,
            path.display()
        )));
    }
    Ok(())
}

/// Watermarks every file in `folder`. One bad image does not stop the rest.
pub fn watermark_images(folder: &Path, text: &str) -> Result<WatermarkReport> {
    let mut report = WatermarkReport::default();

    let mut paths: Vec<_> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    for path in paths {
        match watermark_image(&path, text) {
            Ok(()) => report.marked += 1,
            Err(e) => {
                tracing::warn!("Could not watermark {}: {}", path.display(), e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
