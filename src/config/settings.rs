use crate::config::store::SettingsStore;
use crate::gateway::client::GatewayClient;
use dto::settings_response::{GatewaySettings, SettingsResponse};
use log::{debug, error, warn};

/// Snapshot of the settings: the locally stored config, completed by the gateway's settings when reachable.
///
/// The local signature is kept when the gateway doesn't select any.
/// A gateway failure is logged and the local settings are returned.
pub async fn load_settings(store: &dyn SettingsStore, client: &GatewayClient) -> SettingsResponse {
    let config = match store.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Can't load local config\n{e:#?}");
            return SettingsResponse::new(GatewaySettings::default(), "", Some(e.to_string()));
        }
    };
    let local = SettingsResponse::new(
        GatewaySettings::default(),
        config.signature().as_str(),
        None,
    );

    if config.gas_url().trim().is_empty() {
        debug!("No gateway configured, using local settings");
        return local;
    }

    match client.get_settings(&config).await {
        Ok(remote) if remote.signature().is_empty() => {
            remote.with_signature(config.signature().as_str())
        }
        Ok(remote) => remote,
        Err(e) => {
            warn!("Can't retrieve gateway settings, using local settings\n{e:#?}");
            local
        }
    }
}
