use serde::{Deserialize, Serialize};

/// A position in image-space coordinates, independent of viewport pan/zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One continuous pointer drag. Points are appended while the stroke is
/// active and the line is finalized on stroke end; `size` is the brush
/// diameter in image pixels, set when the stroke starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    #[serde(default)]
    pub size: Option<f32>,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
