use image::ImageFormat;

use crate::model::{Batch, EditHistory};
use crate::raster::{self, CompositeMode, RasterBuffer, Rgba};
use crate::service::InpaintingService;
use crate::viewport::Viewport;

use super::{EditorError, RenderState, Result};

/// Stroke preview overlay, `rgba(189, 255, 1, 0.75)`.
pub const BRUSH_COLOR: Rgba = [189, 255, 1, 191];

#[derive(Debug, Clone)]
pub(super) struct LoadedFile {
    pub(super) name: String,
    pub(super) bytes: Vec<u8>,
    pub(super) format: ImageFormat,
}

/// The editing session: owns the edit history, the working raster, the
/// viewport and the connection to the remote inpainting service. This is the
/// interface the surrounding shell drives; it never touches surfaces or
/// history directly.
pub struct EditorSession {
    pub(super) service: Box<dyn InpaintingService>,
    pub(super) file: Option<LoadedFile>,
    pub(super) original_file: Option<LoadedFile>,
    pub(super) image: Option<RasterBuffer>,
    pub(super) original_image: Option<RasterBuffer>,
    pub(super) history: EditHistory,
    pub(super) viewport: Viewport,
    pub(super) working: RasterBuffer,
    pub(super) state: RenderState,
    container: Option<(f32, f32)>,
}

impl EditorSession {
    /// `high_fidelity` is typically seeded from `Credentials::is_pro()`.
    pub fn new(service: Box<dyn InpaintingService>, high_fidelity: bool) -> Self {
        Self {
            service,
            file: None,
            original_file: None,
            image: None,
            original_image: None,
            history: EditHistory::new(high_fidelity),
            viewport: Viewport::default(),
            working: RasterBuffer::new(0, 0),
            state: RenderState::Idle,
            container: None,
        }
    }

    /// Loads the file being edited (possibly a downscaled working copy) and
    /// resets the session around it.
    pub fn set_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<()> {
        let format = raster::detect_format(&bytes)?;
        let image = raster::decode_image(&bytes)?;
        self.working = RasterBuffer::new(image.width(), image.height());
        self.viewport = self.fit_viewport(image.width(), image.height());
        self.image = Some(image);
        self.file = Some(LoadedFile {
            name: name.to_string(),
            bytes,
            format,
        });
        self.history.reset();
        self.state = RenderState::Idle;
        self.draw(true)
    }

    /// Loads the pristine full-resolution original. This is what gets sent
    /// to the service and what the compositor merges against; when absent,
    /// the working file stands in for it.
    pub fn set_original_file(&mut self, name: &str, bytes: Vec<u8>) -> Result<()> {
        let format = raster::detect_format(&bytes)?;
        self.original_image = Some(raster::decode_image(&bytes)?);
        self.original_file = Some(LoadedFile {
            name: name.to_string(),
            bytes,
            format,
        });
        Ok(())
    }

    /// Container (surface) dimensions for viewport fitting; call on resize.
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.container = Some((width, height));
        if let Some(image) = &self.image {
            self.viewport = Viewport::fit(image.width(), image.height(), width, height);
        }
    }

    pub fn use_hd(&self) -> bool {
        self.history.high_fidelity()
    }

    /// Toggling fidelity mid-session resets the history to a single empty
    /// batch.
    pub fn set_use_hd(&mut self, use_hd: bool) {
        self.history.set_high_fidelity(use_hd);
    }

    pub fn edits(&self) -> &[Batch] {
        self.history.snapshot()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn image(&self) -> Option<&RasterBuffer> {
        self.image.as_ref()
    }

    pub fn original_image(&self) -> Option<&RasterBuffer> {
        self.original_image.as_ref()
    }

    /// The drawing surface as currently rendered.
    pub fn working(&self) -> &RasterBuffer {
        &self.working
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn render_state(&self) -> RenderState {
        self.state
    }

    pub fn add_line(&mut self, force_batch: bool) {
        self.history.add_line(force_batch);
    }

    pub fn undo(&mut self, force_batch: bool) -> Result<()> {
        self.history.undo(force_batch);
        self.draw(true)
    }

    /// Re-renders the working raster: the most recent committed render (or
    /// the loaded image when none exists) plus the stroke preview overlay.
    /// High fidelity previews every line of the open batch; low fidelity
    /// only the active one. Deterministic: with no intervening state change
    /// a second call produces byte-identical output.
    pub fn draw(&mut self, no_line: bool) -> Result<()> {
        let image = self.image.as_ref().ok_or(EditorError::NoFile)?;
        let base = self.history.latest_render().unwrap_or(image);
        self.working.clear();
        self.working.blit_scaled(base, CompositeMode::SourceOver);
        if no_line {
            return Ok(());
        }
        let current = self.history.current_batch();
        if self.history.high_fidelity() {
            raster::draw_lines(&mut self.working, current.lines.iter(), BRUSH_COLOR);
        } else if let Some(line) = current.lines.last() {
            raster::draw_lines(&mut self.working, [line], BRUSH_COLOR);
        }
        Ok(())
    }

    fn fit_viewport(&self, image_width: u32, image_height: u32) -> Viewport {
        let (width, height) = self
            .container
            .unwrap_or((image_width as f32, image_height as f32));
        Viewport::fit(image_width, image_height, width, height)
    }
}
