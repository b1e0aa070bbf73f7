mod client;
mod config;
mod error;
mod multipart;

#[cfg(test)]
mod tests;

pub use client::{InpaintRequest, InpaintingService, RemoteClient};
pub use config::{
    AnonymousCredentials, Credentials, DEFAULT_TIMEOUT, ENDPOINT_ENV, Refiner, ServiceConfig,
    StaticCredentials,
};
pub use error::{Result, ServiceError};
pub use multipart::MultipartBody;
