use crate::model::EditHistory;
use crate::raster::{self, RasterBuffer, Rgba};

/// Full-opacity white; the remote service replaces white regions and keeps
/// black/transparent ones.
pub const STENCIL_COLOR: Rgba = [255, 255, 255, 255];

/// Rebuilds the mask stencil from scratch, drawing every line from every
/// batch ever recorded in the session, committed ones included. The
/// compositor always starts from the pristine original, so re-including
/// already-applied strokes is idempotent and guarantees a correct
/// full-resolution composite no matter how many incremental preview renders
/// happened at a lower resolution.
///
/// The stencil is ephemeral: it is rebuilt before every render call and
/// never persisted.
pub fn synthesize(history: &EditHistory, width: u32, height: u32) -> RasterBuffer {
    let mut stencil = RasterBuffer::new(width, height);
    raster::draw_lines(&mut stencil, history.all_lines(), STENCIL_COLOR);
    stencil
}

#[cfg(test)]
mod tests {
    use crate::model::{EditHistory, Point};
    use crate::raster::RasterBuffer;

    use super::synthesize;

    #[test]
    fn stencil_is_white_along_strokes_and_clear_elsewhere() {
        let mut history = EditHistory::new(false);
        history.start_stroke(10.0);
        history.push_point(Point::new(20.0, 20.0));
        history.push_point(Point::new(40.0, 20.0));

        let stencil = synthesize(&history, 64, 64);
        assert_eq!(stencil.pixel(30, 20), [255, 255, 255, 255]);
        assert_eq!(stencil.pixel(30, 50)[3], 0);
    }

    #[test]
    fn stencil_is_cumulative_across_committed_batches() {
        let mut history = EditHistory::new(false);
        history.start_stroke(8.0);
        history.push_point(Point::new(10.0, 10.0));
        history.commit(RasterBuffer::new(64, 64));
        history.start_stroke(8.0);
        history.push_point(Point::new(50.0, 50.0));

        let stencil = synthesize(&history, 64, 64);
        assert_eq!(stencil.pixel(10, 10)[3], 255);
        assert_eq!(stencil.pixel(50, 50)[3], 255);
    }

    #[test]
    fn empty_history_yields_a_clear_stencil() {
        let history = EditHistory::new(true);
        let stencil = synthesize(&history, 16, 16);
        assert_eq!(stencil, RasterBuffer::new(16, 16));
    }
}
