use crate::raster::{CompositeMode, RasterBuffer};

/// Merges the working raster with the pristine original at the original's
/// full resolution:
///
/// 1. scale the mask stencil up onto a transparent patch,
/// 2. composite the working raster onto the patch with `SourceIn`, leaving
///    edited pixels only where the stencil is set,
/// 3. draw the patch over a copy of the original.
///
/// Pixels outside the mask come out bit-identical to the original. Low
/// fidelity editing happens at the final resolution already, so this is only
/// needed when the working raster is smaller than the original.
pub fn compose(
    original: &RasterBuffer,
    working: &RasterBuffer,
    stencil: &RasterBuffer,
) -> RasterBuffer {
    let mut patch = RasterBuffer::new(original.width(), original.height());
    patch.blit_scaled(stencil, CompositeMode::SourceOver);
    patch.blit_scaled(working, CompositeMode::SourceIn);

    let mut output = original.clone();
    output.blit(&patch, CompositeMode::SourceOver);
    output
}

#[cfg(test)]
mod tests {
    use crate::model::{EditHistory, Point};
    use crate::raster::{CompositeMode, RasterBuffer};

    use super::compose;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RasterBuffer {
        let mut raster = RasterBuffer::new(width, height);
        raster.fill(color);
        raster
    }

    /// Stencil covering exactly the rectangle [x0, x1) x [y0, y1).
    fn rect_stencil(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RasterBuffer {
        let mut stencil = RasterBuffer::new(width, height);
        for y in y0..y1 {
            for x in x0..x1 {
                stencil.put_pixel(i64::from(x), i64::from(y), [255, 255, 255, 255]);
            }
        }
        stencil
    }

    #[test]
    fn masked_region_comes_from_working_rest_from_original() {
        let original = solid(32, 24, [10, 10, 10, 255]);
        let mut working = original.clone();
        for y in 5..12 {
            for x in 8..20 {
                working.put_pixel(x, y, [200, 50, 50, 255]);
            }
        }
        let stencil = rect_stencil(32, 24, 8, 5, 20, 12);

        let output = compose(&original, &working, &stencil);
        for y in 0..24 {
            for x in 0..32 {
                let inside = (8..20).contains(&x) && (5..12).contains(&y);
                let expected = if inside {
                    working.pixel(x, y)
                } else {
                    original.pixel(x, y)
                };
                assert_eq!(output.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn empty_stencil_reproduces_the_original_exactly() {
        let original = solid(16, 16, [33, 66, 99, 255]);
        let working = solid(16, 16, [255, 0, 0, 255]);
        let stencil = RasterBuffer::new(16, 16);
        let output = compose(&original, &working, &stencil);
        assert_eq!(output, original);
    }

    #[test]
    fn low_resolution_working_raster_is_upscaled_through_the_stencil() {
        // Working surface at half resolution, original at full.
        let original = solid(16, 16, [0, 0, 0, 255]);
        let mut working = solid(8, 8, [0, 0, 0, 255]);
        working.put_pixel(2, 2, [255, 255, 255, 255]);

        // Stencil drawn at working resolution around the edited pixel.
        let stencil = rect_stencil(8, 8, 2, 2, 3, 3);

        let output = compose(&original, &working, &stencil);
        // The edited pixel maps to the 2x2 block at (4, 4).
        assert_eq!(output.pixel(4, 4), [255, 255, 255, 255]);
        assert_eq!(output.pixel(5, 5), [255, 255, 255, 255]);
        assert_eq!(output.pixel(6, 6), [0, 0, 0, 255]);
        assert_eq!(output.pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn stencil_from_history_composites_round_trip() {
        let original = solid(40, 40, [5, 5, 5, 255]);
        let mut working = original.clone();
        for y in 0..40u32 {
            for x in 0..40u32 {
                working.put_pixel(i64::from(x), i64::from(y), [90, 90, 90, 255]);
            }
        }

        let mut history = EditHistory::new(true);
        history.start_stroke(10.0);
        history.push_point(Point::new(20.0, 20.0));
        let stencil = crate::mask::synthesize(&history, 40, 40);

        let output = compose(&original, &working, &stencil);
        // Inside the brush dot: working pixels; far away: original.
        assert_eq!(output.pixel(20, 20), [90, 90, 90, 255]);
        assert_eq!(output.pixel(2, 2), [5, 5, 5, 255]);
    }

    #[test]
    fn patch_alone_is_transparent_outside_the_stencil() {
        let working = solid(8, 8, [1, 2, 3, 255]);
        let stencil = rect_stencil(8, 8, 0, 0, 2, 2);
        let mut patch = RasterBuffer::new(8, 8);
        patch.blit_scaled(&stencil, CompositeMode::SourceOver);
        patch.blit_scaled(&working, CompositeMode::SourceIn);
        assert_eq!(patch.pixel(1, 1), [1, 2, 3, 255]);
        assert_eq!(patch.pixel(5, 5)[3], 0);
    }
}
