use crate::model::Point;

pub const MIN_SCALE: f32 = 1.0 / 32.0;
pub const MAX_SCALE: f32 = 8.0;

/// Pan/zoom state for the editing surface, derived purely from explicit
/// image and container dimensions. It is recomputed on load and resize and
/// never stored in the edit history; stroke capture uses the inverse
/// transform to map pointer positions back to image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub min_scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fit(1, 1, 1.0, 1.0)
    }
}

impl Viewport {
    /// Scales the image down to fit the container (never up past 1:1) and
    /// centers it. The fit scale doubles as the minimum zoom level.
    pub fn fit(
        image_width: u32,
        image_height: u32,
        container_width: f32,
        container_height: f32,
    ) -> Self {
        let image_w = image_width.max(1) as f32;
        let image_h = image_height.max(1) as f32;
        let scale = (container_width / image_w)
            .min(container_height / image_h)
            .min(1.0)
            .clamp(MIN_SCALE, MAX_SCALE);
        Self {
            scale,
            min_scale: scale,
            offset_x: (container_width - image_w * scale) * 0.5,
            offset_y: (container_height - image_h * scale) * 0.5,
        }
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, MAX_SCALE);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Surface (pointer) coordinates to image space.
    pub fn to_image(&self, surface_x: f32, surface_y: f32) -> Point {
        Point::new(
            (surface_x - self.offset_x) / self.scale,
            (surface_y - self.offset_y) / self.scale,
        )
    }

    /// Image space back to surface coordinates.
    pub fn to_surface(&self, point: Point) -> (f32, f32) {
        (
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}
