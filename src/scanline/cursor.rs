//! Sequential row cursor over a raster's sample buffer.

use crate::error::PngError;

/// Tracks the read position across rows, honoring the row stride and
/// guarding against reads past the buffer.
///
/// Strictly forward-only: one `next()` per row, never rewound within an
/// encode pass. Each encode owns its own cursor.
pub(crate) struct ScanlineCursor {
    position: usize,
    stride: usize,
    row_span: usize,
    len: usize,
    row: u32,
}

impl ScanlineCursor {
    /// `stride` and `row_span` are in samples; `len` is the buffer's
    /// total sample count.
    pub(crate) fn new(stride: usize, row_span: usize, len: usize) -> Self {
        Self {
            position: 0,
            stride,
            row_span,
            len,
            row: 0,
        }
    }

    /// Offset of the current row's first sample; advances to the next
    /// row. A stride or height that would carry the row past the buffer
    /// is a bounds violation, never a truncated read.
    pub(crate) fn next(&mut self) -> Result<usize, PngError> {
        let offset = self.position;
        if offset >= self.len || self.len - offset < self.row_span {
            return Err(PngError::BoundsViolation {
                row: self.row,
                offset,
                len: self.len,
            });
        }
        self.position = offset.saturating_add(self.stride);
        self.row += 1;
        Ok(offset)
    }
}
