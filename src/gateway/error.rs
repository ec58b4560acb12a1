use crate::config::error::ConfigError;
use thiserror::Error;

pub type Result<T, E = GatewayError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum GatewayError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("HTTP client couldn't be created.")]
    CantCreateClient,
    #[error("timeout")]
    Timeout,
    #[error("The gateway is unreachable [reason: {0}]")]
    Unreachable(String),
    #[error("Authentication to the gateway failed (HTTP {0}). Check the basic auth ID and password.")]
    AuthenticationFailed(u16),
    #[error("The gateway rejected the request [reason: {0}]")]
    Rejected(String),
    #[error("The gateway answered with an unexpected payload [reason: {0}]")]
    MalformedResponse(String),
    #[error("The gateway redirected too many times.")]
    TooManyRedirects,
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Unreachable(error.to_string())
        }
    }
}
