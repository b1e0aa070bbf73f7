use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("raster must have 4 channels, found {0}")]
    InvalidChannels(usize),

    #[error("raster layout failure: {0}")]
    Layout(String),

    #[error("image decode/encode failure: {0}")]
    Image(#[from] image::ImageError),
}
