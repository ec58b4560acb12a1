use crate::config::error::ConfigError::{
    IncompleteCredentials, MalformedGatewayUrl, MissingGatewayUrl,
};
use crate::config::error::Result;
use dto::config::Config;
use reqwest::Url;

pub mod error;
pub mod settings;
pub mod store;

pub const APP_NAME: &str = "auto-mail-pilot";
pub const CONFIG_FILE_NAME: &str = "auto-mail-pilot-config.json";
pub const GAS_URL_ENV_VAR: &str = "AUTO_MAIL_PILOT_GAS_URL";

/// A config is usable for sending when it points to an HTTP(S) gateway
/// and its basic auth credentials are either complete or absent.
pub fn validate_config(config: &Config) -> Result<()> {
    gateway_url(config)?;
    if config.basic_auth_id().is_empty() != config.basic_auth_pw().is_empty() {
        return Err(IncompleteCredentials);
    }

    Ok(())
}

/// The gateway URL without any query string nor fragment,
/// as actions are passed by the client itself.
pub fn gateway_url(config: &Config) -> Result<Url> {
    let gas_url = config.gas_url().trim();
    if gas_url.is_empty() {
        return Err(MissingGatewayUrl);
    }

    let mut url = Url::parse(gas_url).map_err(|_| MalformedGatewayUrl(gas_url.to_owned()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(MalformedGatewayUrl(gas_url.to_owned()));
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
