//! Caps on the rasters an encode call will accept.

use crate::raster::Raster;
use crate::PngError;

/// Pre-flight resource caps, checked before any output reaches the
/// sink. Unset fields are unlimited.
///
/// The per-encode allocations that scale with input are the scanline
/// buffers, so the byte cap is expressed per scanline rather than as a
/// whole-image figure.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes of one encoded scanline.
    pub max_scanline_bytes: Option<usize>,
}

impl Limits {
    /// Reject rasters whose geometry exceeds any configured cap.
    pub(crate) fn check_raster(&self, raster: &Raster<'_>) -> Result<(), PngError> {
        let width = raster.width();
        let height = raster.height();
        if let Some(max) = self.max_width {
            if width > max {
                return Err(PngError::LimitExceeded(format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if height > max {
                return Err(PngError::LimitExceeded(format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(PngError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }

    /// Reject scanlines longer than the configured byte cap. Called
    /// after provider selection, once the encoded row width is known.
    pub(crate) fn check_scanline(&self, bytes: usize) -> Result<(), PngError> {
        if let Some(max) = self.max_scanline_bytes {
            if bytes > max {
                return Err(PngError::LimitExceeded(format!(
                    "scanline of {bytes} bytes exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
