//! PNG encode orchestration.

use std::io::Write;

use crate::limits::Limits;
use crate::raster::{Raster, RasterBuf, RasterNormalizer, Samples};
use crate::scanline::provider_for;
use crate::writer::{self, ColorType, FilterKind, ScanlineWriter};
use crate::PngError;

/// Largest palette addressable at bit depth 8.
const MAX_PALETTE_ENTRIES: usize = 256;

/// PNG encode request.
///
/// Builder-style configuration; `encode` writes a complete PNG stream
/// (signature, IHDR, PLTE/tRNS when indexed, IDAT, IEND) to the sink.
///
/// ```
/// use zenpng::{EncodeRequest, Raster};
///
/// let pixels = vec![0u8; 16 * 16 * 3];
/// let raster = Raster::bytes(&pixels, 16, 16, 3);
///
/// let mut out = Vec::new();
/// EncodeRequest::new()
///     .quality(0.75)
///     .encode(&raster, &mut out)?;
/// # Ok::<(), zenpng::PngError>(())
/// ```
#[derive(Clone)]
pub struct EncodeRequest<'n> {
    quality: f32,
    continuous_ramp: bool,
    normalizer: Option<&'n dyn RasterNormalizer>,
    limits: Option<Limits>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'n> EncodeRequest<'n> {
    pub fn new() -> Self {
        Self {
            quality: 0.75,
            continuous_ramp: false,
            normalizer: None,
            limits: None,
        }
    }

    /// Output quality in `[0, 1]`; higher quality spends less effort on
    /// compression. Maps to DEFLATE level `round(9 × (1 − quality))`
    /// with ties rounding away from zero, so `0.5` yields level 5.
    /// Values outside the range are clamped.
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = quality;
        self
    }

    /// Hint that the rendered content uses a continuous
    /// (non-discretized) color ramp anywhere. Switches the whole image
    /// to sub filtering; the choice is never per-row.
    pub fn continuous_ramp(mut self, ramp: bool) -> Self {
        self.continuous_ramp = ramp;
        self
    }

    /// Collaborator that converts unsupported layouts into a supported
    /// byte-component layout. Invoked at most once per encode;
    /// provider selection is retried on its output.
    pub fn normalizer(mut self, normalizer: &'n dyn RasterNormalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `raster` as a complete PNG stream into `sink`.
    ///
    /// Returns the normalized buffer when the layout required
    /// normalization, so the caller can reuse or dispose of it; `None`
    /// when the raster was encoded directly. On error, partial output
    /// already written to the sink is the caller's to discard; the sink
    /// is never closed or flushed beyond chunk writing.
    pub fn encode<W: Write>(
        &self,
        raster: &Raster<'_>,
        sink: &mut W,
    ) -> Result<Option<RasterBuf>, PngError> {
        // IHDR forbids zero dimensions.
        if raster.width() == 0 || raster.height() == 0 {
            return Err(PngError::EmptyRaster {
                width: raster.width(),
                height: raster.height(),
            });
        }

        if let Some(limits) = &self.limits {
            limits.check_raster(raster)?;
        }

        // Worst case two bytes per channel sample in one row.
        let row_overflow = (raster.width() as usize)
            .checked_mul(raster.bands() as usize)
            .and_then(|samples| samples.checked_mul(2))
            .is_none();
        if row_overflow {
            return Err(PngError::DimensionsTooLarge {
                width: raster.width(),
                height: raster.height(),
            });
        }

        // A palette is only meaningful on single-band byte samples.
        if raster.palette().is_some()
            && !matches!((raster.samples(), raster.bands()), (Samples::U8(_), 1))
        {
            return Err(PngError::UnsupportedLayout(format!(
                "palette attached to {}; palettes require single-band byte samples",
                describe(raster)
            )));
        }

        // Provider selection, with the one-shot normalize-and-retry
        // fallback for layouts the factory does not match.
        let normalized = match provider_for(raster) {
            Some(_) => None,
            None => {
                let Some(normalizer) = self.normalizer else {
                    return Err(PngError::UnsupportedLayout(describe(raster)));
                };
                Some(normalizer.normalize(raster)?)
            }
        };
        let view;
        let source: &Raster<'_> = match &normalized {
            Some(buf) => {
                view = buf.as_raster();
                &view
            }
            None => raster,
        };
        let mut provider = provider_for(source).ok_or_else(|| {
            PngError::UnsupportedLayout(format!("{} (after normalization)", describe(source)))
        })?;

        let indexed = source.palette().is_some();
        let grayscale = !indexed && source.bands() < 3;
        let color_type = match (indexed, grayscale, source.has_alpha()) {
            (true, _, _) => ColorType::Indexed,
            (false, true, false) => ColorType::Grayscale,
            (false, true, true) => ColorType::GrayscaleAlpha,
            (false, false, false) => ColorType::Rgb,
            (false, false, true) => ColorType::Rgba,
        };

        let scanline_len = provider.scanline_len();
        if let Some(limits) = &self.limits {
            limits.check_scanline(scanline_len)?;
        }

        // Last selection-time failure; everything past this point
        // writes to the sink.
        if let Some(palette) = source.palette() {
            if palette.len() > MAX_PALETTE_ENTRIES {
                return Err(PngError::PaletteTooLarge {
                    entries: palette.len(),
                    max: MAX_PALETTE_ENTRIES,
                });
            }
        }

        sink.write_all(&writer::SIGNATURE)?;
        writer::write_chunk(
            sink,
            b"IHDR",
            &writer::ihdr_payload(
                source.width(),
                source.height(),
                provider.bit_depth(),
                color_type,
            ),
        )?;

        if let Some(palette) = source.palette() {
            writer::write_chunk(sink, b"PLTE", &palette.plte_payload())?;
            if palette.has_translucency() {
                writer::write_chunk(sink, b"tRNS", &palette.trns_payload())?;
            }
        }

        let filter = if self.continuous_ramp {
            FilterKind::Sub
        } else {
            FilterKind::None
        };
        let pixel_stride = scanline_len / source.width() as usize;

        let mut writer = ScanlineWriter::new(
            sink,
            compression_level(self.quality),
            filter,
            pixel_stride,
            scanline_len,
        );
        let mut row = vec![0u8; scanline_len];
        for _ in 0..source.height() {
            provider.next_into(&mut row)?;
            writer.write_scanline(&row)?;
        }
        drop(provider);

        let sink = writer.finish()?;
        writer::write_chunk(sink, b"IEND", &[])?;

        Ok(normalized)
    }
}

/// DEFLATE effort from the caller's quality value.
pub(crate) fn compression_level(quality: f32) -> u32 {
    (9.0 * (1.0 - quality.clamp(0.0, 1.0))).round() as u32
}

fn describe(raster: &Raster<'_>) -> String {
    let sample = match raster.samples() {
        Samples::U8(_) => "8-bit",
        Samples::U16(_) => "16-bit",
        Samples::U32(_) => "packed 32-bit",
    };
    format!(
        "{sample} samples, {} bands, alpha={}",
        raster.bands(),
        raster.has_alpha()
    )
}
