use crate::model::{Line, Point};

use super::{CompositeMode, RasterBuffer, Rgba};

/// Rasterizes lines onto `target` as thick round-capped, round-joined
/// strokes. Each line is stamped into a scratch stencil first and blended
/// over the target in a single pass, so overlapping segments within one
/// stroke do not double-blend; separate lines blend independently, like
/// separate canvas `stroke()` calls.
///
/// Lines without a brush size or without points draw nothing.
pub fn draw_lines<'a>(
    target: &mut RasterBuffer,
    lines: impl IntoIterator<Item = &'a Line>,
    color: Rgba,
) {
    let mut scratch = RasterBuffer::new(target.width(), target.height());
    let mut dirty = false;
    for line in lines {
        let Some(size) = line.size else { continue };
        if size <= 0.0 || line.points.is_empty() {
            continue;
        }
        if dirty {
            scratch.clear();
        }
        let radius = size * 0.5;
        let mut previous = line.points[0];
        for &point in &line.points {
            stamp_segment(&mut scratch, previous, point, radius, color);
            previous = point;
        }
        target.blit(&scratch, CompositeMode::SourceOver);
        dirty = true;
    }
}

/// Fills the capsule of the given radius around the segment `a..b`. A
/// zero-length segment degenerates to a disc, which gives single-point
/// strokes a dot and joints their rounding.
fn stamp_segment(target: &mut RasterBuffer, a: Point, b: Point, radius: f32, color: Rgba) {
    let x0 = ((a.x.min(b.x) - radius).floor() as i64).max(0);
    let y0 = ((a.y.min(b.y) - radius).floor() as i64).max(0);
    let x1 = ((a.x.max(b.x) + radius).ceil() as i64).min(i64::from(target.width()) - 1);
    let y1 = ((a.y.max(b.y) + radius).ceil() as i64).min(i64::from(target.height()) - 1);
    if x1 < x0 || y1 < y0 {
        return;
    }

    let radius_squared = radius * radius;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let center_x = x as f32 + 0.5;
            let center_y = y as f32 + 0.5;
            if distance_squared_to_segment(center_x, center_y, a, b) <= radius_squared {
                target.put_pixel(x, y, color);
            }
        }
    }
}

fn distance_squared_to_segment(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let (rel_x, rel_y) = (px - a.x, py - a.y);
    let (seg_x, seg_y) = (b.x - a.x, b.y - a.y);
    let length_squared = seg_x * seg_x + seg_y * seg_y;
    let t = if length_squared > 0.0 {
        ((rel_x * seg_x + rel_y * seg_y) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (rel_x - t * seg_x, rel_y - t * seg_y);
    dx * dx + dy * dy
}
