//! # zenpng
//!
//! Scanline-oriented PNG encoder for native raster pixel layouts.
//!
//! Rendering pipelines hand over pixel buffers in whatever layout the
//! renderer produced: byte-interleaved RGB/RGBA (sometimes with the
//! color components reversed), one packed 32-bit word per pixel,
//! 16-bit components, or palette indices. This crate converts those
//! rows straight into PNG scanline order, with no intermediate image
//! conversion, and writes a complete stream (IHDR, PLTE/tRNS when
//! indexed, zlib-compressed IDAT, IEND) to any [`std::io::Write`] sink.
//!
//! ## Layout dispatch
//!
//! A scanline provider specialized for the buffer's physical layout is
//! selected once per image; component-order decisions happen once per
//! provider instance, never per pixel. Buffers already in PNG order
//! take a bulk-copy fast path. Layouts the factory cannot match can be
//! converted by a caller-supplied [`RasterNormalizer`]; selection is
//! retried exactly once on its output.
//!
//! ## Filtering and compression
//!
//! The scanline filter is fixed for the whole image: `sub` when the
//! caller signals a continuous color ramp anywhere in the rendered
//! content, `none` otherwise. DEFLATE effort maps from a quality value
//! in `[0, 1]`.
//!
//! ## Non-Goals
//!
//! - Decoding PNG
//! - Color space conversion / gamma handling
//! - Interlaced (Adam7) output
//!
//! ## Usage
//!
//! ```
//! use zenpng::{ComponentOrder, EncodeRequest, Raster};
//!
//! // A BGRA buffer straight out of a renderer.
//! let pixels = vec![0u8; 32 * 32 * 4];
//! let raster = Raster::bytes(&pixels, 32, 32, 4)
//!     .with_alpha()
//!     .with_order(ComponentOrder::Reversed);
//!
//! let mut out = Vec::new();
//! EncodeRequest::new()
//!     .quality(0.75)
//!     .continuous_ramp(false)
//!     .encode(&raster, &mut out)?;
//! # Ok::<(), zenpng::PngError>(())
//! ```

#![forbid(unsafe_code)]

mod encode;
mod error;
mod limits;
mod palette;
mod raster;
mod scanline;
mod writer;

// Re-exports
pub use encode::EncodeRequest;
pub use error::PngError;
pub use limits::Limits;
pub use palette::{Palette, PaletteEntry};
pub use raster::{ComponentOrder, Raster, RasterBuf, RasterNormalizer, Samples};
