use crate::config::error::ConfigError;
use crate::config::store::SettingsStore;
use crate::config::validate_config;
use crate::gateway::client::GatewayClient;
use crate::merge::dispatch::DispatchOptions;
use crate::tools::log_message_and_return;
use crate::web::error::{ApiResult, error_body, error_response};
use dto::config::Config;
use log::info;
use rocket::http::Status;
use std::sync::Mutex;

/// Everything a request needs to talk to the gateway.
/// The config is loaded once at startup, then only replaced when saved.
pub struct SessionState {
    store: Box<dyn SettingsStore>,
    config: Mutex<Config>,
    client: GatewayClient,
    dispatch_options: DispatchOptions,
}

impl SessionState {
    pub fn new(
        store: Box<dyn SettingsStore>,
        client: GatewayClient,
        dispatch_options: DispatchOptions,
    ) -> Result<Self, ConfigError> {
        let config = store.load_config()?;
        info!("Config loaded: {config:?}");

        Ok(Self {
            store,
            config: Mutex::new(config),
            client,
            dispatch_options,
        })
    }

    /// A snapshot of the current config. It stays the same for a whole send, even if saved meanwhile.
    pub fn config(&self) -> ApiResult<Config> {
        self.config
            .lock()
            .map(|config| config.clone())
            .map_err(log_message_and_return(
                "Session state is poisoned.",
                (Status::InternalServerError, error_body("Session state is unavailable.")),
            ))
    }

    /// Persist `config` and use it for the next requests.
    /// A config without gateway URL can be saved, but an inconsistent one can't.
    pub fn save_config(&self, config: Config) -> ApiResult<()> {
        if !config.gas_url().trim().is_empty() {
            validate_config(&config).map_err(error_response)?;
        }
        self.store.save_settings(&config).map_err(error_response)?;

        let mut current_config = self.config.lock().map_err(log_message_and_return(
            "Session state is poisoned.",
            (Status::InternalServerError, error_body("Session state is unavailable.")),
        ))?;
        *current_config = config;
        Ok(())
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    pub fn dispatch_options(&self) -> &DispatchOptions {
        &self.dispatch_options
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::config::error::ConfigError::IncompleteCredentials;
    use crate::config::error::Result;
    use std::sync::Arc;
    use std::time::Duration;

    /// Config kept in memory, shared with the test to check what has been saved.
    #[derive(Default, Clone)]
    pub struct MemoryStore {
        pub config: Arc<Mutex<Config>>,
    }

    impl SettingsStore for MemoryStore {
        fn load_config(&self) -> Result<Config> {
            Ok(self.config.lock().unwrap().clone())
        }

        fn save_settings(&self, config: &Config) -> Result<()> {
            *self.config.lock().unwrap() = config.clone();
            Ok(())
        }
    }

    pub fn build_test_session(config: Config) -> SessionState {
        let store = MemoryStore {
            config: Arc::new(Mutex::new(config)),
        };
        SessionState::new(
            Box::new(store),
            GatewayClient::new(Duration::from_secs(5)).unwrap(),
            DispatchOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn should_load_config_at_startup() {
        let config = Config::new("https://gas", "Sales", "id", "pw");

        let session = build_test_session(config.clone());

        assert_eq!(Ok(config), session.config());
    }

    #[test]
    fn should_save_config() {
        let store = MemoryStore::default();
        let session = SessionState::new(
            Box::new(store.clone()),
            GatewayClient::new(Duration::from_secs(5)).unwrap(),
            DispatchOptions::default(),
        )
        .unwrap();
        let config = Config::new("https://gas", "Sales", "", "");

        session.save_config(config.clone()).unwrap();

        assert_eq!(Ok(config.clone()), session.config());
        assert_eq!(config, *store.config.lock().unwrap());
    }

    #[test]
    fn should_not_save_inconsistent_config() {
        let session = build_test_session(Config::default());

        let result = session.save_config(Config::new("https://gas", "", "id", ""));

        assert_eq!(Err(error_response(IncompleteCredentials)), result);
        assert_eq!(Ok(Config::default()), session.config());
    }
}
