use std::io::Read;
use std::time::Instant;

use log::info;

use super::{Credentials, MultipartBody, Result, ServiceConfig, ServiceError};

/// One inpainting call. `image_file` should be the original untouched file,
/// not the working raster; the service composites against it server-side.
#[derive(Debug, Clone, Copy)]
pub struct InpaintRequest<'a> {
    pub image_file: &'a [u8],
    pub image_name: &'a str,
    /// PNG stencil, white = region to replace.
    pub mask_png: &'a [u8],
    pub hd: bool,
}

/// Seam to the remote inpainting model. The production implementation is
/// `RemoteClient`; tests substitute mocks.
pub trait InpaintingService {
    /// Returns the raw bytes of the rendered image on success.
    fn inpaint(&self, request: &InpaintRequest<'_>) -> Result<Vec<u8>>;
}

/// Blocking `ureq` client for the remote inpainting endpoint.
pub struct RemoteClient {
    agent: ureq::Agent,
    config: ServiceConfig,
    credentials: Box<dyn Credentials>,
}

impl RemoteClient {
    pub fn new(config: ServiceConfig, credentials: Box<dyn Credentials>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl InpaintingService for RemoteClient {
    fn inpaint(&self, request: &InpaintRequest<'_>) -> Result<Vec<u8>> {
        let mut body = MultipartBody::new();
        body.add_file(
            "image_file",
            request.image_name,
            "application/octet-stream",
            request.image_file,
        );
        body.add_file("mask_file", "mask.png", "image/png", request.mask_png);
        body.add_text("refiner", self.config.refiner.as_str());
        let content_type = body.content_type();

        let mut http = self
            .agent
            .post(&self.config.endpoint)
            .set("Content-Type", &content_type)
            .set("X-HD", if request.hd { "true" } else { "false" })
            .set("X-REFINER", self.config.refiner.as_str());
        if let Some(token) = self.credentials.id_token() {
            http = http.set("Authorization", &format!("Bearer {token}"));
        }
        if let Some(token) = self.credentials.attestation_token() {
            http = http.set("X-Attestation", &token);
        }

        let started = Instant::now();
        let response = http.send_bytes(&body.finish()).map_err(|error| match error {
            ureq::Error::Status(code, response) => ServiceError::Status {
                code,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => ServiceError::Transport(transport.to_string()),
        })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|error| ServiceError::Transport(error.to_string()))?;
        info!(
            "inpainting call returned {} bytes in {} ms",
            bytes.len(),
            started.elapsed().as_millis()
        );
        Ok(bytes)
    }
}
