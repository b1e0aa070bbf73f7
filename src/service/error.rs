use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("inpainting endpoint is not configured (set INPAINT_ENDPOINT or pass --endpoint)")]
    MissingEndpoint,

    #[error("inpainting service returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("inpainting service transport failure: {0}")]
    Transport(String),
}
