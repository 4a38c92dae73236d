/// Errors from PNG scanline encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PngError {
    /// No scanline provider matches the raster's declared layout,
    /// even after normalization.
    #[error("unsupported pixel layout: {0}")]
    UnsupportedLayout(String),

    /// The cursor would read past the end of the sample buffer.
    /// Usually a mis-declared stride or height.
    #[error("scanline {row} starts at sample {offset} but the buffer holds {len} samples")]
    BoundsViolation { row: u32, offset: usize, len: usize },

    /// A sample indexes past the end of the palette.
    #[error("scanline {row} references palette index {index} but the palette has {entries} entries")]
    MissingPaletteEntry { row: u32, index: u8, entries: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("raster has no pixels: {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("palette has {entries} entries, at most {max} fit the bit depth")]
    PaletteTooLarge { entries: usize, max: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error writing PNG stream")]
    Io(#[from] std::io::Error),
}
