use crate::gateway::error::GatewayError::CantCreateClient;
use crate::gateway::error::Result;
use crate::tools::log_message_and_return;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

/// The gateway answers through redirects that must keep the basic auth header,
/// so redirects are never followed by the client itself.
pub fn build_client(timeout: Duration) -> Result<Client> {
    reqwest::ClientBuilder::new()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
