//! Minimal PNG container writer: chunk framing, scanline filtering,
//! zlib-compressed IDAT streaming.

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;

/// PNG file signature.
pub(crate) const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Compressed bytes buffered before an IDAT chunk is emitted.
const IDAT_CHUNK_SIZE: usize = 32 * 1024;

/// PNG color types as stored in IHDR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorType {
    Grayscale = 0,
    Rgb = 2,
    Indexed = 3,
    GrayscaleAlpha = 4,
    Rgba = 6,
}

/// Whole-image scanline filter choice. Fixed before encoding starts,
/// never varied per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FilterKind {
    None,
    Sub,
}

impl FilterKind {
    /// Filter-type byte prefixed to every scanline.
    pub(crate) fn tag(self) -> u8 {
        match self {
            FilterKind::None => 0,
            FilterKind::Sub => 1,
        }
    }
}

/// Frame one chunk: length, tag, payload, CRC-32 over tag and payload.
pub(crate) fn write_chunk<W: Write>(sink: &mut W, tag: &[u8; 4], payload: &[u8]) -> io::Result<()> {
    sink.write_all(&(payload.len() as u32).to_be_bytes())?;
    sink.write_all(tag)?;
    sink.write_all(payload)?;
    let mut crc = crc32fast::Hasher::new();
    crc.update(tag);
    crc.update(payload);
    sink.write_all(&crc.finalize().to_be_bytes())
}

pub(crate) fn ihdr_payload(width: u32, height: u32, bit_depth: u8, color: ColorType) -> [u8; 13] {
    let mut payload = [0u8; 13];
    payload[0..4].copy_from_slice(&width.to_be_bytes());
    payload[4..8].copy_from_slice(&height.to_be_bytes());
    payload[8] = bit_depth;
    payload[9] = color as u8;
    // compression method, filter method, interlace: all zero
    payload
}

/// Streams filtered scanlines into zlib-compressed IDAT chunks.
pub(crate) struct ScanlineWriter<'w, W: Write> {
    deflate: ZlibEncoder<IdatChunker<'w, W>>,
    filter: FilterKind,
    pixel_stride: usize,
    row: Vec<u8>,
}

impl<'w, W: Write> ScanlineWriter<'w, W> {
    /// `pixel_stride` is the byte width of one complete pixel, the
    /// distance the sub filter reaches back.
    pub(crate) fn new(
        sink: &'w mut W,
        level: u32,
        filter: FilterKind,
        pixel_stride: usize,
        scanline_len: usize,
    ) -> Self {
        Self {
            deflate: ZlibEncoder::new(IdatChunker::new(sink), Compression::new(level)),
            filter,
            pixel_stride: pixel_stride.max(1),
            row: vec![0u8; scanline_len + 1],
        }
    }

    /// Prefix the filter tag, apply the filter, and compress one row.
    pub(crate) fn write_scanline(&mut self, raw: &[u8]) -> io::Result<()> {
        self.row[0] = self.filter.tag();
        match self.filter {
            FilterKind::None => self.row[1..].copy_from_slice(raw),
            FilterKind::Sub => {
                let bpp = self.pixel_stride;
                for (i, &b) in raw.iter().enumerate() {
                    let left = if i >= bpp { raw[i - bpp] } else { 0 };
                    self.row[i + 1] = b.wrapping_sub(left);
                }
            }
        }
        self.deflate.write_all(&self.row)
    }

    /// Finish the compressed stream and emit any remaining IDAT data.
    /// Returns the sink so the caller can write the trailer.
    pub(crate) fn finish(self) -> io::Result<&'w mut W> {
        self.deflate.finish()?.finish()
    }
}

/// `Write` adapter that frames compressed bytes into IDAT chunks.
struct IdatChunker<'w, W: Write> {
    sink: &'w mut W,
    buf: Vec<u8>,
}

impl<'w, W: Write> IdatChunker<'w, W> {
    fn new(sink: &'w mut W) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(IDAT_CHUNK_SIZE),
        }
    }

    fn finish(mut self) -> io::Result<&'w mut W> {
        if !self.buf.is_empty() {
            write_chunk(self.sink, b"IDAT", &self.buf)?;
            self.buf.clear();
        }
        Ok(self.sink)
    }
}

impl<W: Write> Write for IdatChunker<'_, W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        while self.buf.len() >= IDAT_CHUNK_SIZE {
            write_chunk(self.sink, b"IDAT", &self.buf[..IDAT_CHUNK_SIZE])?;
            self.buf.drain(..IDAT_CHUNK_SIZE);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
