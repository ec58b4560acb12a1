use crate::config::error::ConfigError::{
    CantReadConfigFile, CantWriteConfigFile, MalformedConfigFile, NoConfigFolder,
};
use crate::config::error::Result;
use crate::config::{APP_NAME, CONFIG_FILE_NAME, GAS_URL_ENV_VAR};
use crate::tools::env_args::retrieve_arg_value;
use dto::config::Config;
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILE_ARG: &str = "--config-file";

/// Where the config lives between two sessions.
pub trait SettingsStore: Send + Sync {
    fn load_config(&self) -> Result<Config>;
    fn save_settings(&self, config: &Config) -> Result<()>;
}

/// Config stored as JSON files.
///
/// Loading layers, later ones winning for every non-empty field:
/// 1. the file next to the executable, shipped with the distribution,
/// 2. the user file, in the user config folder unless `--config-file` says otherwise,
/// 3. the `AUTO_MAIL_PILOT_GAS_URL` environment variable, for the gateway URL only.
///
/// Saving always writes the user file.
#[derive(Debug)]
pub struct FileSettingsStore {
    defaults_path: Option<PathBuf>,
    user_path: PathBuf,
    gas_url_override: Option<String>,
}

impl FileSettingsStore {
    pub fn new(
        defaults_path: Option<PathBuf>,
        user_path: PathBuf,
        gas_url_override: Option<String>,
    ) -> Self {
        Self {
            defaults_path,
            user_path,
            gas_url_override,
        }
    }

    pub fn from_environment() -> Result<Self> {
        let user_path = match retrieve_arg_value(CONFIG_FILE_ARG) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::config_dir()
                .ok_or(NoConfigFolder)?
                .join(APP_NAME)
                .join(CONFIG_FILE_NAME),
        };
        let defaults_path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|folder| folder.join(CONFIG_FILE_NAME)));
        let gas_url_override = std::env::var(GAS_URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty());

        Ok(Self::new(defaults_path, user_path, gas_url_override))
    }

    #[cfg(feature = "demo")]
    pub fn with_gas_url_override(mut self, gas_url: impl Into<String>) -> Self {
        self.gas_url_override = Some(gas_url.into());
        self
    }
}

impl SettingsStore for FileSettingsStore {
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(defaults_path) = &self.defaults_path {
            match read_config_file(defaults_path) {
                Ok(Some(defaults)) => config = config.overlaid_with(defaults),
                Ok(None) => {}
                Err(error) => warn!("Ignoring distribution config: {error}"),
            }
        }

        if let Some(user_config) = read_config_file(&self.user_path)? {
            config = config.overlaid_with(user_config);
        }

        if let Some(gas_url) = &self.gas_url_override {
            debug!("Gateway URL overridden by `{GAS_URL_ENV_VAR}`");
            config = config.with_gas_url(gas_url.clone());
        }

        Ok(config)
    }

    fn save_settings(&self, config: &Config) -> Result<()> {
        let path = display(&self.user_path);
        let write_error = |reason: String| CantWriteConfigFile {
            path: path.clone(),
            reason,
        };

        if let Some(folder) = self.user_path.parent() {
            fs::create_dir_all(folder).map_err(|e| write_error(e.to_string()))?;
        }
        let content =
            serde_json::to_string_pretty(config).map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.user_path, content).map_err(|e| write_error(e.to_string()))?;

        info!("Config saved [path: {path}]");
        Ok(())
    }
}

/// A missing file is not an error: `Ok(None)` is returned.
fn read_config_file(path: &Path) -> Result<Option<Config>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(CantReadConfigFile {
                path: display(path),
                reason: error.to_string(),
            });
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|error| MalformedConfigFile {
            path: display(path),
            reason: error.to_string(),
        })
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
