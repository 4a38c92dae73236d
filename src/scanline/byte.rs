//! Byte-interleaved scanline providers.

use super::{ScanlineCursor, ScanlineProvider};
use crate::raster::Raster;
use crate::PngError;

/// 3- or 4-band byte-interleaved pixels.
///
/// Direct order takes a bulk contiguous copy; reversed order swizzles
/// B,G,R back to R,G,B per pixel, with alpha staying last.
pub(crate) struct ByteRgbProvider<'a> {
    samples: &'a [u8],
    cursor: ScanlineCursor,
    width: usize,
    bands: usize,
    reversed: bool,
}

impl<'a> ByteRgbProvider<'a> {
    pub(crate) fn new(samples: &'a [u8], raster: &Raster<'a>, reversed: bool) -> Self {
        Self {
            samples,
            cursor: ScanlineCursor::new(raster.stride(), raster.row_span(), samples.len()),
            width: raster.width() as usize,
            bands: raster.bands() as usize,
            reversed,
        }
    }
}

impl ScanlineProvider for ByteRgbProvider<'_> {
    fn bit_depth(&self) -> u8 {
        8
    }

    fn scanline_len(&self) -> usize {
        self.width * self.bands
    }

    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError> {
        let start = self.cursor.next()?;
        let row = &self.samples[start..start + self.width * self.bands];
        if !self.reversed {
            out[..row.len()].copy_from_slice(row);
            return Ok(());
        }
        for (src, dst) in row
            .chunks_exact(self.bands)
            .zip(out.chunks_exact_mut(self.bands))
        {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
            if self.bands == 4 {
                dst[3] = src[3];
            }
        }
        Ok(())
    }
}

/// 2-band gray+alpha bytes; `reversed` means alpha precedes gray in
/// memory.
pub(crate) struct GrayAlphaProvider<'a> {
    samples: &'a [u8],
    cursor: ScanlineCursor,
    width: usize,
    reversed: bool,
}

impl<'a> GrayAlphaProvider<'a> {
    pub(crate) fn new(samples: &'a [u8], raster: &Raster<'a>, reversed: bool) -> Self {
        Self {
            samples,
            cursor: ScanlineCursor::new(raster.stride(), raster.row_span(), samples.len()),
            width: raster.width() as usize,
            reversed,
        }
    }
}

impl ScanlineProvider for GrayAlphaProvider<'_> {
    fn bit_depth(&self) -> u8 {
        8
    }

    fn scanline_len(&self) -> usize {
        self.width * 2
    }

    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError> {
        let start = self.cursor.next()?;
        let row = &self.samples[start..start + self.width * 2];
        if !self.reversed {
            out[..row.len()].copy_from_slice(row);
            return Ok(());
        }
        for (src, dst) in row.chunks_exact(2).zip(out.chunks_exact_mut(2)) {
            dst[0] = src[1];
            dst[1] = src[0];
        }
        Ok(())
    }
}

/// Single-band bytes: grayscale samples or palette indices. Always a
/// bulk copy; indexed rows are checked so every sample has a palette
/// entry before any of them is emitted.
pub(crate) struct ByteGrayProvider<'a> {
    samples: &'a [u8],
    cursor: ScanlineCursor,
    width: usize,
    palette_entries: Option<usize>,
    row: u32,
}

impl<'a> ByteGrayProvider<'a> {
    pub(crate) fn new(samples: &'a [u8], raster: &Raster<'a>) -> Self {
        Self {
            samples,
            cursor: ScanlineCursor::new(raster.stride(), raster.row_span(), samples.len()),
            width: raster.width() as usize,
            palette_entries: raster.palette().map(|p| p.len()),
            row: 0,
        }
    }
}

impl ScanlineProvider for ByteGrayProvider<'_> {
    fn bit_depth(&self) -> u8 {
        8
    }

    fn scanline_len(&self) -> usize {
        self.width
    }

    fn next_into(&mut self, out: &mut [u8]) -> Result<(), PngError> {
        let start = self.cursor.next()?;
        let row = &self.samples[start..start + self.width];
        if let Some(entries) = self.palette_entries {
            if let Some(&index) = row.iter().find(|&&index| index as usize >= entries) {
                return Err(PngError::MissingPaletteEntry {
                    row: self.row,
                    index,
                    entries,
                });
            }
        }
        out[..self.width].copy_from_slice(row);
        self.row += 1;
        Ok(())
    }
}
