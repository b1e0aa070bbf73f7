use std::time::Duration;

use super::{Result, ServiceError};

/// The remote call is blocking with no cancellation; the agent timeout is
/// the bounded recovery policy.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const ENDPOINT_ENV: &str = "INPAINT_ENDPOINT";

/// Server-side refinement pass applied to the inpainting result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Refiner {
    #[default]
    None,
    Medium,
}

impl Refiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Refiner::None => "none",
            Refiner::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub refiner: Refiner,
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            refiner: Refiner::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        std::env::var(ENDPOINT_ENV)
            .map(Self::new)
            .map_err(|_| ServiceError::MissingEndpoint)
    }
}

/// Entitlement and token collaborators, consumed from the surrounding
/// application. Tokens are optional; anonymous calls simply omit the
/// corresponding headers.
pub trait Credentials {
    fn is_pro(&self) -> bool;
    fn id_token(&self) -> Option<String>;
    fn attestation_token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousCredentials;

impl Credentials for AnonymousCredentials {
    fn is_pro(&self) -> bool {
        false
    }

    fn id_token(&self) -> Option<String> {
        None
    }

    fn attestation_token(&self) -> Option<String> {
        None
    }
}

/// Fixed tokens handed in up front, e.g. from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pub pro: bool,
    pub id_token: Option<String>,
    pub attestation_token: Option<String>,
}

impl Credentials for StaticCredentials {
    fn is_pro(&self) -> bool {
        self.pro
    }

    fn id_token(&self) -> Option<String> {
        self.id_token.clone()
    }

    fn attestation_token(&self) -> Option<String> {
        self.attestation_token.clone()
    }
}
