use crate::raster::RasterBuffer;

use super::{Batch, Line, Point};

/// The ordered edit log, newest batch last. The last batch is always open
/// and mutable; every earlier batch is committed and immutable through this
/// API. All mutation goes through the methods below, and each mutation bumps
/// `version` so callers can drive redraws explicitly instead of observing
/// the log.
///
/// `high_fidelity` selects the batching policy: low fidelity gives every
/// stroke its own batch (and its own remote render), high fidelity
/// accumulates strokes in the open batch until an explicit render.
#[derive(Debug, Clone)]
pub struct EditHistory {
    batches: Vec<Batch>,
    high_fidelity: bool,
    version: u64,
}

impl EditHistory {
    pub fn new(high_fidelity: bool) -> Self {
        Self {
            batches: vec![Batch::open()],
            high_fidelity,
            version: 0,
        }
    }

    pub fn snapshot(&self) -> &[Batch] {
        &self.batches
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn high_fidelity(&self) -> bool {
        self.high_fidelity
    }

    pub fn current_batch(&self) -> &Batch {
        self.batches.last().expect("history is never empty")
    }

    /// Switching fidelity resets the log to a single empty batch.
    pub fn set_high_fidelity(&mut self, high_fidelity: bool) {
        self.high_fidelity = high_fidelity;
        self.batches = vec![Batch::open()];
        self.touch();
    }

    /// Drops all edits, e.g. when a new file is loaded.
    pub fn reset(&mut self) {
        self.batches = vec![Batch::open()];
        self.touch();
    }

    /// Marks the start of a stroke: the open batch's trailing line receives
    /// the brush size and subsequent points.
    pub fn start_stroke(&mut self, size: f32) {
        self.current_line_mut().size = Some(size);
        self.touch();
    }

    pub fn push_point(&mut self, point: Point) {
        self.current_line_mut().push(point);
        self.touch();
    }

    /// Opens the next undo unit. Low fidelity opens a whole new batch (one
    /// stroke per batch); high fidelity, or `force_batch`, appends an empty
    /// line to the current batch instead.
    pub fn add_line(&mut self, force_batch: bool) {
        if self.high_fidelity || force_batch {
            self.current_batch_mut().lines.push(Line::new());
        } else {
            self.batches.push(Batch::open());
        }
        self.touch();
    }

    /// Undo policy:
    /// - low fidelity (not forced): remove the last committed batch and
    ///   reset the open batch to a single empty line;
    /// - high fidelity or forced: pop the last line of the current batch if
    ///   it has more than one, else pop the whole batch if another remains,
    ///   else do nothing.
    pub fn undo(&mut self, force_batch: bool) {
        if self.high_fidelity || force_batch {
            let current = self.batches.last_mut().expect("history is never empty");
            if current.lines.len() > 1 {
                current.lines.pop();
                if let Some(last) = current.lines.last_mut() {
                    *last = Line::new();
                }
            } else if self.batches.len() > 1 {
                self.batches.pop();
            } else {
                return;
            }
        } else {
            if self.batches.len() > 1 {
                let last_committed = self.batches.len() - 2;
                self.batches.remove(last_committed);
            }
            self.batches.last_mut().expect("history is never empty").lines = vec![Line::new()];
        }
        self.touch();
    }

    /// Commits the open batch with a decoded remote render and opens a fresh
    /// batch. The trailing empty line (left behind by `add_line`) moves
    /// conceptually into the new batch rather than staying in the committed
    /// one.
    pub fn commit(&mut self, render: RasterBuffer) {
        let open = self.batches.last_mut().expect("history is never empty");
        if open.lines.len() > 1 && open.lines.last().is_some_and(Line::is_empty) {
            open.lines.pop();
        }
        open.render = Some(render);
        self.batches.push(Batch::open());
        self.touch();
    }

    /// The most recent committed render, if any batch has one.
    pub fn latest_render(&self) -> Option<&RasterBuffer> {
        self.batches.iter().rev().find_map(|batch| batch.render.as_ref())
    }

    /// Every line ever recorded in the session, committed batches included.
    /// The mask synthesizer deliberately draws all of them.
    pub fn all_lines(&self) -> impl Iterator<Item = &Line> {
        self.batches.iter().flat_map(|batch| batch.lines.iter())
    }

    fn current_batch_mut(&mut self) -> &mut Batch {
        self.batches.last_mut().expect("history is never empty")
    }

    fn current_line_mut(&mut self) -> &mut Line {
        self.current_batch_mut()
            .lines
            .last_mut()
            .expect("open batch always has a line")
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}
