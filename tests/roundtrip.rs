//! Encode with zenpng, decode with the `png` crate, compare pixels.

use zenpng::{ComponentOrder, EncodeRequest, Palette, PaletteEntry, PngError, Raster};

fn decode(data: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf)
}

fn encode(raster: &Raster<'_>) -> Vec<u8> {
    let mut out = Vec::new();
    EncodeRequest::new().encode(raster, &mut out).unwrap();
    out
}

fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            if (x + y) % 2 == 0 {
                for c in 0..bpp {
                    pixels[off + c] = 200u8.wrapping_add(c as u8 * 20);
                }
            } else {
                for c in 0..bpp {
                    pixels[off + c] = 10 + (c as u8 * 30);
                }
            }
        }
    }
    pixels
}

#[test]
fn rgb8_direct_roundtrip() {
    let (w, h) = (5, 4);
    let pixels = checkerboard(w, h, 3);
    let encoded = encode(&Raster::bytes(&pixels, w as u32, h as u32, 3));

    let (info, decoded) = decode(&encoded);
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!((info.width, info.height), (w as u32, h as u32));
    assert_eq!(decoded, pixels);
}

#[test]
fn rgb8_reversed_roundtrip() {
    let (w, h) = (4, 3);
    let rgb = checkerboard(w, h, 3);
    let mut bgr = rgb.clone();
    for px in bgr.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    let raster = Raster::bytes(&bgr, w as u32, h as u32, 3).with_order(ComponentOrder::Reversed);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(decoded, rgb);
}

#[test]
fn rgba8_reversed_pixel_layout() {
    // 2x1 reversed-order RGBA: memory [B,G,R,A] per pixel.
    let bgra = [10u8, 20, 30, 255, 60, 50, 40, 128];
    let raster = Raster::bytes(&bgra, 2, 1, 4)
        .with_alpha()
        .with_order(ComponentOrder::Reversed);

    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(decoded, vec![30, 20, 10, 255, 40, 50, 60, 128]);
}

#[test]
fn rgba8_direct_roundtrip() {
    let (w, h) = (3, 3);
    let pixels = checkerboard(w, h, 4);
    let raster = Raster::bytes(&pixels, w as u32, h as u32, 4).with_alpha();
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(decoded, pixels);
}

#[test]
fn gray8_roundtrip() {
    let pixels = vec![0u8, 64, 128, 192, 255, 100];
    let raster = Raster::bytes(&pixels, 3, 2, 1);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(decoded, pixels);
}

#[test]
fn gray_alpha_direct_roundtrip() {
    let pixels = vec![10u8, 255, 20, 128, 30, 0, 40, 64];
    let raster = Raster::bytes(&pixels, 2, 2, 2).with_alpha();
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::GrayscaleAlpha);
    assert_eq!(decoded, pixels);
}

#[test]
fn gray_alpha_reversed_roundtrip() {
    // Alpha precedes gray in memory.
    let ag = vec![255u8, 10, 128, 20, 0, 30, 64, 40];
    let raster = Raster::bytes(&ag, 2, 2, 2)
        .with_alpha()
        .with_order(ComponentOrder::Reversed);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::GrayscaleAlpha);
    assert_eq!(decoded, vec![10, 255, 20, 128, 30, 0, 40, 64]);
}

fn be_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

#[test]
fn gray16_big_endian_split() {
    let samples = [0x0102u16, 0xFFEE, 0x8000, 0x00FF];
    let raster = Raster::words(&samples, 2, 2, 1);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::Sixteen);
    assert_eq!(decoded, be_bytes(&samples));
}

#[test]
fn rgb16_direct_big_endian_split() {
    let samples = [0x1234u16, 0x5678, 0x9ABC, 0x0001, 0x00FF, 0xFF00];
    let raster = Raster::words(&samples, 2, 1, 3);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Sixteen);
    assert_eq!(decoded, be_bytes(&samples));
}

#[test]
fn rgb16_reversed_big_endian_split() {
    // Memory is B,G,R per pixel.
    let samples = [0x9ABCu16, 0x5678, 0x1234, 0xFF00, 0x00FF, 0x0001];
    let raster = Raster::words(&samples, 2, 1, 3).with_order(ComponentOrder::Reversed);
    let (_, decoded) = decode(&encode(&raster));
    let expected = [0x1234u16, 0x5678, 0x9ABC, 0x0001, 0x00FF, 0xFF00];
    assert_eq!(decoded, be_bytes(&expected));
}

#[test]
fn rgba16_direct_big_endian_split() {
    let samples = [0x1111u16, 0x2222, 0x3333, 0xFFFF, 0x4444, 0x5555, 0x6666, 0x8000];
    let raster = Raster::words(&samples, 2, 1, 4).with_alpha();
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Sixteen);
    assert_eq!(decoded, be_bytes(&samples));
}

#[test]
fn rgba16_reversed_big_endian_split() {
    // Memory is B,G,R,A per pixel; alpha stays last.
    let samples = [0x3333u16, 0x2222, 0x1111, 0xFFFF, 0x6666, 0x5555, 0x4444, 0x8000];
    let raster = Raster::words(&samples, 2, 1, 4)
        .with_alpha()
        .with_order(ComponentOrder::Reversed);
    let (_, decoded) = decode(&encode(&raster));
    let expected = [0x1111u16, 0x2222, 0x3333, 0xFFFF, 0x4444, 0x5555, 0x6666, 0x8000];
    assert_eq!(decoded, be_bytes(&expected));
}

#[test]
fn packed_rgb_direct_roundtrip() {
    // 0x00RRGGBB
    let words = [0x00102030u32, 0x00405060, 0x00708090, 0x00A0B0C0];
    let raster = Raster::packed(&words, 2, 2, 3);
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(
        decoded,
        vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90, 0xA0, 0xB0, 0xC0]
    );
}

#[test]
fn packed_rgb_reversed_roundtrip() {
    // 0x00BBGGRR
    let words = [0x00302010u32, 0x00605040];
    let raster = Raster::packed(&words, 2, 1, 3).with_order(ComponentOrder::Reversed);
    let (_, decoded) = decode(&encode(&raster));
    assert_eq!(decoded, vec![0x10, 0x20, 0x30, 0x40, 0x50, 0x60]);
}

#[test]
fn packed_rgba_fixed_bit_layout() {
    // Bits 16-23 red, 8-15 green, 0-7 blue, 24-31 alpha.
    let words = [0xFF102030u32, 0x80405060];
    let raster = Raster::packed(&words, 2, 1, 4).with_alpha();
    let (info, decoded) = decode(&encode(&raster));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(decoded, vec![0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60, 0x80]);
}

#[test]
fn row_padding_is_skipped() {
    // 2 pixels of RGB per row, 2 padding bytes of garbage after each row.
    let samples = vec![
        1, 2, 3, 4, 5, 6, 0xAA, 0xBB, // row 0 + pad
        7, 8, 9, 10, 11, 12, 0xCC, 0xDD, // row 1 + pad
    ];
    let raster = Raster::bytes(&samples, 2, 2, 3).with_stride(8);
    let (_, decoded) = decode(&encode(&raster));
    assert_eq!(decoded, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn indexed_roundtrip_preserves_indices_and_palette() {
    let palette = Palette::new(vec![
        PaletteEntry::opaque(255, 0, 0),
        PaletteEntry::with_alpha(0, 255, 0, 128),
        PaletteEntry::opaque(0, 0, 255),
    ]);
    let indices = vec![0u8, 1, 2, 2, 1, 0];
    let raster = Raster::bytes(&indices, 3, 2, 1).with_palette(&palette);
    let encoded = encode(&raster);

    let mut decoder = png::Decoder::new(&encoded[..]);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Indexed);
    assert_eq!(buf, indices);
    let plte = reader.info().palette.as_ref().unwrap();
    assert_eq!(plte.as_ref(), &[255, 0, 0, 0, 255, 0, 0, 0, 255]);
    let trns = reader.info().trns.as_ref().unwrap();
    assert_eq!(trns.as_ref(), &[255, 128, 255]);
}

#[test]
fn sub_filtered_image_decodes_identically() {
    // Horizontal gradient, the case the sub filter exists for.
    let (w, h) = (64, 8);
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            pixels[off] = (x * 4) as u8;
            pixels[off + 1] = (x * 4 + 1) as u8;
            pixels[off + 2] = (y * 16) as u8;
        }
    }
    let raster = Raster::bytes(&pixels, w as u32, h as u32, 3);
    let mut out = Vec::new();
    EncodeRequest::new()
        .continuous_ramp(true)
        .encode(&raster, &mut out)
        .unwrap();
    let (_, decoded) = decode(&out);
    assert_eq!(decoded, pixels);
}

#[test]
fn quality_extremes_both_decode_identically() {
    let (w, h) = (16, 16);
    let pixels = checkerboard(w, h, 4);
    let raster = Raster::bytes(&pixels, w as u32, h as u32, 4).with_alpha();

    for quality in [0.0, 1.0] {
        let mut out = Vec::new();
        EncodeRequest::new()
            .quality(quality)
            .encode(&raster, &mut out)
            .unwrap();
        let (_, decoded) = decode(&out);
        assert_eq!(decoded, pixels, "quality {quality}");
    }
}

#[test]
fn oversized_stride_is_a_bounds_violation() {
    let pixels = vec![0u8; 4 * 4 * 3];
    // Stride claims rows are twice as far apart as the buffer allows.
    let raster = Raster::bytes(&pixels, 4, 4, 3).with_stride(24);
    let mut out = Vec::new();
    let err = EncodeRequest::new().encode(&raster, &mut out).unwrap_err();
    assert!(matches!(err, PngError::BoundsViolation { row: 2, .. }), "{err:?}");
}
