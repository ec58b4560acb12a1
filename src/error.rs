use crate::config::error::ConfigError;
use crate::gateway::error::GatewayError;
use crate::merge::error::MergeError;
use crate::recipient::error::ImportError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Import(#[from] ImportError),
}
