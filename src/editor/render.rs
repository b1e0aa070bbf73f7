use std::time::Instant;

use image::ImageFormat;
use log::{info, warn};

use crate::mask;
use crate::raster::{self, RasterBuffer};
use crate::service::InpaintRequest;

use super::{EditorError, EditorSession, RenderState, Result};

/// The render orchestrator: serializes calls to the remote service and
/// applies the result to the history. Execution is single-threaded and the
/// call blocks; the `Requesting` state is what rejects re-entrant triggers
/// and pointer input for the duration.
impl EditorSession {
    pub fn render(&mut self) -> Result<()> {
        if self.state == RenderState::Requesting {
            return Err(EditorError::RenderInFlight);
        }
        if self.file.is_none() || self.image.is_none() {
            return Err(EditorError::NoFile);
        }

        self.state = RenderState::Requesting;
        let started = Instant::now();
        match self.request_render() {
            Ok(render) => {
                info!(
                    "inpainting completed in {} ms ({}x{})",
                    started.elapsed().as_millis(),
                    render.width(),
                    render.height()
                );
                self.history.commit(render);
                self.state = RenderState::Idle;
                self.draw(true)
            }
            Err(error) => {
                warn!("inpainting failed: {error}");
                self.state = RenderState::Error;
                // Committed history stays untouched. A fresh empty line
                // keeps the next stroke from visually joining the failed
                // one.
                self.history.add_line(true);
                self.state = RenderState::Idle;
                Err(error)
            }
        }
    }

    fn request_render(&self) -> Result<RasterBuffer> {
        let file = self.file.as_ref().ok_or(EditorError::NoFile)?;
        let image = self.image.as_ref().ok_or(EditorError::NoFile)?;

        let stencil = mask::synthesize(&self.history, image.width(), image.height());
        let mask_png = raster::encode_image(&stencil, ImageFormat::Png)?;
        let source = self.original_file.as_ref().unwrap_or(file);
        let request = InpaintRequest {
            image_file: &source.bytes,
            image_name: &source.name,
            mask_png: &mask_png,
            hd: self.history.high_fidelity(),
        };
        let bytes = self.service.inpaint(&request)?;
        raster::decode_image(&bytes).map_err(EditorError::Decode)
    }
}
