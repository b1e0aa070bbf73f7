use image::ImageFormat;

use crate::model::{Line, Point};

use super::{CompositeMode, RasterBuffer, decode_image, draw_lines, encode_image};

fn solid(width: u32, height: u32, color: super::Rgba) -> RasterBuffer {
    let mut raster = RasterBuffer::new(width, height);
    raster.fill(color);
    raster
}

#[test]
fn new_raster_is_transparent() {
    let raster = RasterBuffer::new(3, 2);
    assert_eq!(raster.width(), 3);
    assert_eq!(raster.height(), 2);
    assert_eq!(raster.pixel(2, 1), [0, 0, 0, 0]);
}

#[test]
fn source_over_opaque_source_replaces_destination() {
    let mut dst = solid(2, 2, [10, 20, 30, 255]);
    let src = solid(2, 2, [200, 100, 50, 255]);
    dst.blit(&src, CompositeMode::SourceOver);
    assert_eq!(dst.pixel(0, 0), [200, 100, 50, 255]);
}

#[test]
fn source_over_transparent_source_keeps_destination() {
    let mut dst = solid(2, 2, [10, 20, 30, 255]);
    let src = RasterBuffer::new(2, 2);
    dst.blit(&src, CompositeMode::SourceOver);
    assert_eq!(dst.pixel(1, 1), [10, 20, 30, 255]);
}

#[test]
fn source_over_blends_partial_alpha() {
    let mut dst = solid(1, 1, [0, 0, 0, 255]);
    let src = solid(1, 1, [255, 255, 255, 128]);
    dst.blit(&src, CompositeMode::SourceOver);
    let out = dst.pixel(0, 0);
    assert_eq!(out[3], 255);
    assert!(out[0] > 120 && out[0] < 136, "blend off: {out:?}");
}

#[test]
fn source_in_keeps_source_only_where_destination_is_opaque() {
    // Destination: opaque left pixel, transparent right pixel.
    let mut dst = RasterBuffer::new(2, 1);
    dst.put_pixel(0, 0, [255, 255, 255, 255]);
    let src = solid(2, 1, [9, 8, 7, 255]);
    dst.blit(&src, CompositeMode::SourceIn);
    assert_eq!(dst.pixel(0, 0), [9, 8, 7, 255]);
    assert_eq!(dst.pixel(1, 0)[3], 0);
}

#[test]
fn blit_scaled_at_equal_size_is_an_exact_copy() {
    let mut dst = RasterBuffer::new(5, 4);
    let mut src = RasterBuffer::new(5, 4);
    src.put_pixel(3, 2, [1, 2, 3, 255]);
    src.put_pixel(0, 0, [4, 5, 6, 255]);
    dst.blit_scaled(&src, CompositeMode::SourceOver);
    assert_eq!(dst, src);
}

#[test]
fn blit_scaled_upscales_with_nearest_neighbor() {
    let mut src = RasterBuffer::new(2, 1);
    src.put_pixel(0, 0, [255, 0, 0, 255]);
    src.put_pixel(1, 0, [0, 255, 0, 255]);
    let mut dst = RasterBuffer::new(4, 2);
    dst.blit_scaled(&src, CompositeMode::SourceOver);
    assert_eq!(dst.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(1, 1), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(2, 0), [0, 255, 0, 255]);
    assert_eq!(dst.pixel(3, 1), [0, 255, 0, 255]);
}

#[test]
fn draw_lines_stamps_a_round_capped_stroke() {
    let mut raster = RasterBuffer::new(60, 20);
    let line = Line {
        size: Some(8.0),
        points: vec![Point::new(10.0, 10.0), Point::new(50.0, 10.0)],
    };
    draw_lines(&mut raster, [&line], [255, 255, 255, 255]);

    // On the spine of the stroke.
    assert_eq!(raster.pixel(30, 10), [255, 255, 255, 255]);
    // Round cap extends past the end point.
    assert_eq!(raster.pixel(52, 10), [255, 255, 255, 255]);
    // Well outside the brush radius.
    assert_eq!(raster.pixel(30, 1)[3], 0);
    assert_eq!(raster.pixel(2, 10)[3], 0);
}

#[test]
fn single_point_stroke_draws_a_dot() {
    let mut raster = RasterBuffer::new(20, 20);
    let line = Line {
        size: Some(6.0),
        points: vec![Point::new(10.0, 10.0)],
    };
    draw_lines(&mut raster, [&line], [255, 255, 255, 255]);
    assert_eq!(raster.pixel(10, 10)[3], 255);
    assert_eq!(raster.pixel(10, 12)[3], 255);
    assert_eq!(raster.pixel(10, 16)[3], 0);
}

#[test]
fn sizeless_or_empty_lines_draw_nothing() {
    let mut raster = RasterBuffer::new(8, 8);
    let sizeless = Line {
        size: None,
        points: vec![Point::new(4.0, 4.0)],
    };
    let empty = Line {
        size: Some(10.0),
        points: Vec::new(),
    };
    draw_lines(&mut raster, [&sizeless, &empty], [255, 255, 255, 255]);
    assert_eq!(raster, RasterBuffer::new(8, 8));
}

#[test]
fn overlapping_segments_within_one_stroke_do_not_double_blend() {
    // A stroke that doubles back over itself, drawn semi-transparent.
    let line = Line {
        size: Some(6.0),
        points: vec![
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(5.0, 5.0),
        ],
    };
    let mut raster = RasterBuffer::new(20, 10);
    draw_lines(&mut raster, [&line], [100, 100, 100, 128]);
    assert_eq!(raster.pixel(10, 5)[3], 128);
}

#[test]
fn png_roundtrip_preserves_pixels() {
    let mut raster = RasterBuffer::new(4, 3);
    raster.put_pixel(1, 2, [7, 6, 5, 255]);
    raster.put_pixel(3, 0, [255, 255, 255, 128]);
    let bytes = encode_image(&raster, ImageFormat::Png).expect("encode png");
    let decoded = decode_image(&bytes).expect("decode png");
    assert_eq!(decoded, raster);
}

#[test]
fn detect_format_recognizes_png() {
    let raster = solid(2, 2, [1, 2, 3, 255]);
    let bytes = encode_image(&raster, ImageFormat::Png).expect("encode png");
    assert_eq!(
        super::detect_format(&bytes).expect("detect"),
        ImageFormat::Png
    );
}

#[test]
fn jpeg_encode_flattens_alpha() {
    let raster = solid(8, 8, [120, 130, 140, 255]);
    let bytes = encode_image(&raster, ImageFormat::Jpeg).expect("encode jpeg");
    let decoded = decode_image(&bytes).expect("decode jpeg");
    assert_eq!(decoded.width(), 8);
    assert_eq!(decoded.pixel(4, 4)[3], 255);
}
