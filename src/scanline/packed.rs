//! Packed-word providers: one 32-bit integer per pixel.

use super::{ScanlineCursor, ScanlineProvider};
use crate::raster::Raster;
use crate::PngError;

/// 3 or 4 color bands packed into one 32-bit word per pixel.
///
/// With alpha the bit layout is fixed: bits 16-23 red, 8-15 green,
/// 0-7 blue, 24-31 alpha. Without alpha the color direction follows
/// the raster's declared component order, branched once per instance.
pub(crate) struct PackedRgbProvider<'a> {
    samples: &'a [u32],
    cursor: ScanlineCursor,
    width: usize,
    has_alpha: bool,
    reversed: bool,
}

impl<'a> PackedRgbProvider<'a> {
    pub(crate) fn new(samples: &'a [u32], raster: &Raster<'a>, reversed: bool) -> Self {
        Self {
            samples,
            cursor: ScanlineCursor::new(raster.stride(), raster.row_span(), samples.len()),
            width: raster.width() as usize,
            has_alpha: raster.has_alpha(),
            reversed,
        }
    }
}

impl ScanlineProvider for PackedRgbProvider<'_> {
    fn bit_depth(&self) -> u8 {
        8
    }

    fn scanline_len(&self) -> usize {
        self.width * if self.has_alpha { 4 } else { 3 }
    }

    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError> {
        let start = self.cursor.next()?;
        let row = &self.samples[start..start + self.width];
        if self.has_alpha {
            for (&px, dst) in row.iter().zip(out.chunks_exact_mut(4)) {
                dst[0] = (px >> 16) as u8;
                dst[1] = (px >> 8) as u8;
                dst[2] = px as u8;
                dst[3] = (px >> 24) as u8;
            }
        } else if !self.reversed {
            for (&px, dst) in row.iter().zip(out.chunks_exact_mut(3)) {
                dst[0] = (px >> 16) as u8;
                dst[1] = (px >> 8) as u8;
                dst[2] = px as u8;
            }
        } else {
            for (&px, dst) in row.iter().zip(out.chunks_exact_mut(3)) {
                dst[0] = px as u8;
                dst[1] = (px >> 8) as u8;
                dst[2] = (px >> 16) as u8;
            }
        }
        Ok(())
    }
}
