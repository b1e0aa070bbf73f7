use crate::raster::RasterBuffer;

use super::Line;

/// A group of lines treated as one undo unit. A batch with `render` set is
/// committed: the remote result has been applied and the lines are kept only
/// so the mask can be reconstructed later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub lines: Vec<Line>,
    pub render: Option<RasterBuffer>,
}

impl Batch {
    /// A fresh open batch, ready to receive the next stroke.
    pub fn open() -> Self {
        Self {
            lines: vec![Line::new()],
            render: None,
        }
    }

    pub fn is_committed(&self) -> bool {
        self.render.is_some()
    }
}
