//! 16-bit component providers.
//!
//! PNG stores each 16-bit channel big-endian, so every sample is split
//! into its high and low byte on the way out.

use super::{ScanlineCursor, ScanlineProvider};
use crate::raster::Raster;
use crate::PngError;

/// 1-, 3-, or 4-band 16-bit components.
pub(crate) struct ShortProvider<'a> {
    samples: &'a [u16],
    cursor: ScanlineCursor,
    width: usize,
    bands: usize,
    reversed: bool,
}

impl<'a> ShortProvider<'a> {
    pub(crate) fn new(samples: &'a [u16], raster: &Raster<'a>, reversed: bool) -> Self {
        Self {
            samples,
            cursor: ScanlineCursor::new(raster.stride(), raster.row_span(), samples.len()),
            width: raster.width() as usize,
            bands: raster.bands() as usize,
            // Order only applies to color triples.
            reversed: reversed && raster.bands() >= 3,
        }
    }
}

impl ScanlineProvider for ShortProvider<'_> {
    fn bit_depth(&self) -> u8 {
        16
    }

    fn scanline_len(&self) -> usize {
        self.width * self.bands * 2
    }

    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError> {
        let start = self.cursor.next()?;
        let row = &self.samples[start..start + self.width * self.bands];
        if !self.reversed {
            for (sample, dst) in row.iter().zip(out.chunks_exact_mut(2)) {
                dst.copy_from_slice(&sample.to_be_bytes());
            }
            return Ok(());
        }
        for (src, dst) in row
            .chunks_exact(self.bands)
            .zip(out.chunks_exact_mut(self.bands * 2))
        {
            dst[0..2].copy_from_slice(&src[2].to_be_bytes());
            dst[2..4].copy_from_slice(&src[1].to_be_bytes());
            dst[4..6].copy_from_slice(&src[0].to_be_bytes());
            if self.bands == 4 {
                dst[6..8].copy_from_slice(&src[3].to_be_bytes());
            }
        }
        Ok(())
    }
}
