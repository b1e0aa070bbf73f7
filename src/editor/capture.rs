use super::{EditorError, EditorSession, RenderState, Result};

/// Stroke capture. Pointer positions arrive in surface coordinates and are
/// mapped through the inverse viewport transform, so pan/zoom never leaks
/// into the recorded lines.
impl EditorSession {
    /// Opens the active line of the current batch with the given brush size.
    /// Rejected while a render is in flight; the input layer does not queue
    /// strokes.
    pub fn begin_stroke(&mut self, surface_x: f32, surface_y: f32, brush_size: f32) -> Result<()> {
        if !self.state.accepts_input() {
            return Err(EditorError::RenderInFlight);
        }
        if self.image.is_none() {
            return Err(EditorError::NoFile);
        }
        self.state = RenderState::AwaitingStroke;
        let point = self.viewport.to_image(surface_x, surface_y);
        self.history.start_stroke(brush_size);
        self.history.push_point(point);
        self.draw(false)
    }

    pub fn extend_stroke(&mut self, surface_x: f32, surface_y: f32) -> Result<()> {
        if self.state != RenderState::AwaitingStroke {
            return Err(EditorError::NoActiveStroke);
        }
        let point = self.viewport.to_image(surface_x, surface_y);
        self.history.push_point(point);
        self.draw(false)
    }

    /// Finalizes the stroke. Low fidelity sends it to the service
    /// immediately; high fidelity stores it and opens the next line.
    pub fn end_stroke(&mut self) -> Result<()> {
        if self.state != RenderState::AwaitingStroke {
            return Err(EditorError::NoActiveStroke);
        }
        self.state = RenderState::Idle;
        if self.history.high_fidelity() {
            self.add_line(false);
            self.draw(false)
        } else {
            self.render()
        }
    }
}
