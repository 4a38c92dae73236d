//! Read-only raster views over native pixel memory.

use crate::error::PngError;
use crate::palette::Palette;

/// Physical sample storage of a raster.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub enum Samples<'a> {
    /// 8-bit components, one sample per band.
    U8(&'a [u8]),
    /// 16-bit components, one sample per band (native endian).
    U16(&'a [u16]),
    /// One packed 32-bit word per pixel.
    U32(&'a [u32]),
}

impl Samples<'_> {
    /// Total number of samples in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(s) => s.len(),
            Self::U16(s) => s.len(),
            Self::U32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Order of color components in memory relative to PNG's R,G,B[,A].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComponentOrder {
    /// Components already in PNG order.
    #[default]
    Direct,
    /// Color components reversed (B,G,R); alpha, when present, stays last.
    Reversed,
}

/// Read-only view of a rectangular pixel buffer.
///
/// The encoder never mutates the buffer; it only reads rows through a
/// scanline provider. The stride is measured in samples and may exceed
/// the logical row width when rows carry padding.
///
/// ```
/// use zenpng::{ComponentOrder, Raster};
///
/// let bgra = [30u8, 20, 10, 255, 60, 50, 40, 128];
/// let raster = Raster::bytes(&bgra, 2, 1, 4)
///     .with_alpha()
///     .with_order(ComponentOrder::Reversed);
/// assert_eq!(raster.stride(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Raster<'a> {
    samples: Samples<'a>,
    width: u32,
    height: u32,
    bands: u8,
    has_alpha: bool,
    order: ComponentOrder,
    stride: usize,
    palette: Option<&'a Palette>,
}

impl<'a> Raster<'a> {
    /// Byte-interleaved raster, `bands` samples per pixel.
    pub fn bytes(samples: &'a [u8], width: u32, height: u32, bands: u8) -> Self {
        Self::build(Samples::U8(samples), width, height, bands)
    }

    /// 16-bit-component raster, `bands` samples per pixel.
    pub fn words(samples: &'a [u16], width: u32, height: u32, bands: u8) -> Self {
        Self::build(Samples::U16(samples), width, height, bands)
    }

    /// Packed-word raster: one 32-bit integer per pixel carrying
    /// `bands` color components (3 or 4).
    pub fn packed(samples: &'a [u32], width: u32, height: u32, bands: u8) -> Self {
        Self::build(Samples::U32(samples), width, height, bands)
    }

    fn build(samples: Samples<'a>, width: u32, height: u32, bands: u8) -> Self {
        let mut raster = Self {
            samples,
            width,
            height,
            bands,
            has_alpha: false,
            order: ComponentOrder::Direct,
            stride: 0,
            palette: None,
        };
        raster.stride = raster.row_span();
        raster
    }

    /// Mark the last band as an alpha channel.
    pub fn with_alpha(mut self) -> Self {
        self.has_alpha = true;
        self
    }

    /// Declare the component order of the buffer.
    pub fn with_order(mut self, order: ComponentOrder) -> Self {
        self.order = order;
        self
    }

    /// Override the row stride, in samples. Must be at least the
    /// logical row width; excess is padding skipped between rows.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Attach a color table; the samples are then palette indices.
    /// Only meaningful for single-band byte rasters.
    pub fn with_palette(mut self, palette: &'a Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn samples(&self) -> Samples<'a> {
        self.samples
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bands(&self) -> u8 {
        self.bands
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn order(&self) -> ComponentOrder {
        self.order
    }

    /// Row stride in samples.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn palette(&self) -> Option<&'a Palette> {
        self.palette
    }

    /// Samples occupied by one pixel: 1 for packed words, otherwise the
    /// band count.
    pub fn samples_per_pixel(&self) -> usize {
        match self.samples {
            Samples::U32(_) => 1,
            _ => self.bands as usize,
        }
    }

    /// Samples occupied by one logical row, excluding stride padding.
    pub(crate) fn row_span(&self) -> usize {
        self.width as usize * self.samples_per_pixel()
    }
}

#[cfg(feature = "rgb")]
impl<'a> Raster<'a> {
    /// View over typed RGB pixels.
    pub fn from_rgb_pixels(pixels: &'a [rgb::RGB8], width: u32, height: u32) -> Self {
        use rgb::ComponentBytes as _;
        Self::bytes(pixels.as_bytes(), width, height, 3)
    }

    /// View over typed RGBA pixels.
    pub fn from_rgba_pixels(pixels: &'a [rgb::RGBA8], width: u32, height: u32) -> Self {
        use rgb::ComponentBytes as _;
        Self::bytes(pixels.as_bytes(), width, height, 4).with_alpha()
    }
}

/// Owned byte-layout raster, as produced by a [`RasterNormalizer`].
///
/// Always component order [`ComponentOrder::Direct`] with no row padding.
#[derive(Clone, Debug)]
pub struct RasterBuf {
    samples: Vec<u8>,
    width: u32,
    height: u32,
    bands: u8,
    has_alpha: bool,
    palette: Option<Palette>,
}

impl RasterBuf {
    pub fn new(samples: Vec<u8>, width: u32, height: u32, bands: u8) -> Self {
        Self {
            samples,
            width,
            height,
            bands,
            has_alpha: false,
            palette: None,
        }
    }

    pub fn with_alpha(mut self) -> Self {
        self.has_alpha = true;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bands(&self) -> u8 {
        self.bands
    }

    /// Borrow as a [`Raster`] view.
    pub fn as_raster(&self) -> Raster<'_> {
        let mut raster = Raster::bytes(&self.samples, self.width, self.height, self.bands);
        if self.has_alpha {
            raster = raster.with_alpha();
        }
        if let Some(palette) = &self.palette {
            raster = raster.with_palette(palette);
        }
        raster
    }
}

/// Converts a raster the provider factory cannot handle into a
/// supported byte-component layout.
///
/// Supplied by the caller. The encoder invokes it at most once per
/// encode and retries provider selection on the result; a second miss
/// is a permanent [`PngError::UnsupportedLayout`].
pub trait RasterNormalizer {
    fn normalize(&self, raster: &Raster<'_>) -> Result<RasterBuf, PngError>;
}
