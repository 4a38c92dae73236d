//! Scanline providers: one PNG-formatted row per call.
//!
//! Each provider encodes one native pixel layout. The factory selects a
//! single variant per image; component-order branches happen once per
//! provider instance, never per pixel.

mod byte;
mod cursor;
mod packed;
mod short;

pub(crate) use cursor::ScanlineCursor;

use crate::raster::{ComponentOrder, Raster, Samples};
use crate::PngError;

/// Produces one PNG-ordered scanline per call.
///
/// Geometry is fixed at construction. `next_into` must be called at
/// most `height` times; the encoder's row loop enforces that.
pub(crate) trait ScanlineProvider {
    /// Bits per channel sample in the output stream (8 or 16).
    fn bit_depth(&self) -> u8;

    /// Encoded bytes per scanline.
    fn scanline_len(&self) -> usize;

    /// Fill `out` (exactly `scanline_len` bytes) with the next row and
    /// advance the cursor by one row.
    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError>;
}

/// Select the provider matching the raster's declared layout, or `None`
/// when the caller must normalize the buffer first.
pub(crate) fn provider_for<'a>(raster: &Raster<'a>) -> Option<Box<dyn ScanlineProvider + 'a>> {
    let reversed = raster.order() == ComponentOrder::Reversed;
    match (raster.samples(), raster.bands(), raster.has_alpha()) {
        (Samples::U8(samples), 1, false) => Some(Box::new(byte::ByteGrayProvider::new(
            samples, raster,
        ))),
        (Samples::U8(samples), 2, true) => Some(Box::new(byte::GrayAlphaProvider::new(
            samples, raster, reversed,
        ))),
        (Samples::U8(samples), 3, false) | (Samples::U8(samples), 4, true) => Some(Box::new(
            byte::ByteRgbProvider::new(samples, raster, reversed),
        )),
        (Samples::U16(samples), 1, false)
        | (Samples::U16(samples), 3, false)
        | (Samples::U16(samples), 4, true) => Some(Box::new(short::ShortProvider::new(
            samples, raster, reversed,
        ))),
        (Samples::U32(samples), 3, false) | (Samples::U32(samples), 4, true) => Some(Box::new(
            packed::PackedRgbProvider::new(samples, raster, reversed),
        )),
        _ => None,
    }
}
