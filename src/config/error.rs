use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("The gateway URL is not set.")]
    MissingGatewayUrl,
    #[error("The gateway URL is malformed [url: {0}]")]
    MalformedGatewayUrl(String),
    #[error("Basic auth requires both an ID and a password.")]
    IncompleteCredentials,
    #[error("No user configuration folder is available on this system.")]
    NoConfigFolder,
    #[error("Can't read the configuration file [path: {path}, reason: {reason}]")]
    CantReadConfigFile { path: String, reason: String },
    #[error("The configuration file is malformed [path: {path}, reason: {reason}]")]
    MalformedConfigFile { path: String, reason: String },
    #[error("Can't write the configuration file [path: {path}, reason: {reason}]")]
    CantWriteConfigFile { path: String, reason: String },
}
