//! Capturing source content into bitmaps.

use crate::bitmap::Bitmap;
use crate::RasterizeError;
use image::imageops::FilterType;
use std::path::Path;

/// Renders some opaque source content into a [Bitmap]. The scale multiplies the
/// captured resolution and has no effect on the document layout.
pub trait Rasterizer {
    type Handle: ?Sized;

    fn capture(&self, handle: &Self::Handle, scale: f32) -> Result<Bitmap, RasterizeError>;
}

/// Loads pre-rendered snapshots from disk. A snapshot is taken to be rendered
/// at a scale of 1, and is resampled to the requested scale.
#[derive(Debug, Default, Copy, Clone)]
pub struct SnapshotRasterizer;

impl SnapshotRasterizer {
    pub fn new() -> SnapshotRasterizer {
        SnapshotRasterizer
    }
}

impl Rasterizer for SnapshotRasterizer {
    type Handle = Path;

    fn capture(&self, path: &Path, scale: f32) -> Result<Bitmap, RasterizeError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RasterizeError::Unavailable(format!(
                "cannot capture {} at a scale of {scale}",
                path.display()
            )));
        }

        let is_tga = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false);

        let data = std::fs::read(path)?;
        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;

        if scale == 1.0 {
            return Ok(Bitmap::new(image));
        }

        let width = (image.width() as f32 * scale).round().max(1.0) as u32;
        let height = (image.height() as f32 * scale).round().max(1.0) as u32;
        log::debug!(
            "resampling {} from {}x{} to {width}x{height}",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Bitmap::new(image.resize_exact(
            width,
            height,
            FilterType::Triangle,
        )))
    }
}
