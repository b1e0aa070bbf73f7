use std::path::{Path, PathBuf};

use crate::compose;
use crate::mask;
use crate::raster;

use super::{EditorError, EditorSession, Result};

/// Platform share sheet or equivalent. Returning `false` means the
/// capability is unavailable or declined and the caller should fall back to
/// a plain file download.
pub trait ShareCapability {
    fn share(&mut self, name: &str, bytes: &[u8]) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Shared,
    Saved(PathBuf),
}

impl EditorSession {
    /// Export filename: the original name with `_cleanup` inserted before
    /// the extension.
    pub fn export_name(&self) -> Result<String> {
        let file = self.file.as_ref().ok_or(EditorError::NoFile)?;
        let path = Path::new(&file.name);
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&file.name);
        Ok(match path.extension().and_then(|ext| ext.to_str()) {
            Some(extension) => format!("{stem}_cleanup.{extension}"),
            None => format!("{stem}_cleanup"),
        })
    }

    /// Encodes the export raster in the original file's format. Low fidelity
    /// edits at final resolution, so the working raster is the result; high
    /// fidelity composites the working raster into the full-resolution
    /// original through the cumulative mask.
    pub fn export_bytes(&mut self) -> Result<Vec<u8>> {
        let format = self.file.as_ref().ok_or(EditorError::NoFile)?.format;
        self.draw(true)?;
        let raster = if self.use_hd() {
            let image = self.image.as_ref().ok_or(EditorError::NoFile)?;
            let original = self.original_image.as_ref().unwrap_or(image);
            let stencil = mask::synthesize(&self.history, image.width(), image.height());
            compose::compose(original, &self.working, &stencil)
        } else {
            self.working.clone()
        };
        Ok(raster::encode_image(&raster, format)?)
    }

    /// Tries the platform share capability first and falls back to writing
    /// the file into `fallback_dir`. Side effect only; the history is not
    /// touched.
    pub fn download(
        &mut self,
        mut share: Option<&mut dyn ShareCapability>,
        fallback_dir: &Path,
    ) -> Result<ExportOutcome> {
        let name = self.export_name()?;
        let bytes = self.export_bytes()?;
        if let Some(share) = share.as_deref_mut()
            && share.share(&name, &bytes)
        {
            return Ok(ExportOutcome::Shared);
        }
        let path = fallback_dir.join(&name);
        std::fs::write(&path, &bytes)?;
        Ok(ExportOutcome::Saved(path))
    }
}
