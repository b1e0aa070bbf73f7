use thiserror::Error;

use crate::raster::RasterError;
use crate::service::ServiceError;

pub type Result<T> = std::result::Result<T, EditorError>;

/// `NoFile` and `NoActiveStroke` are precondition failures: they indicate
/// caller misuse and are never recovered internally. Service and decode
/// failures are caught at the render orchestrator boundary only, where the
/// committed history is left untouched and drawing can resume.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no file loaded")]
    NoFile,

    #[error("no stroke in progress")]
    NoActiveStroke,

    #[error("a render request is already in flight")]
    RenderInFlight,

    #[error("inpainting failed: {0}")]
    Service(#[from] ServiceError),

    #[error("could not decode the rendered image: {0}")]
    Decode(RasterError),

    #[error("raster failure: {0}")]
    Raster(#[from] RasterError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
