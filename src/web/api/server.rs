use crate::config::error::Result as ConfigResult;
use crate::config::store::{FileSettingsStore, SettingsStore};
use crate::error::Result;
use crate::gateway::client::{DEFAULT_TIMEOUT, GatewayClient};
use crate::merge::dispatch::DispatchOptions;
use crate::tools::env_args::retrieve_parsed_arg_value;
use crate::web::api::batch_storage::SharedBatchStorage;
use crate::web::api::session_state::SessionState;
use crate::web::api::{
    attachment_controller, batch_controller, catalog_controller, config_controller,
    mail_controller, version_controller,
};
use crate::web::server::Server;
use rocket::{Build, Rocket};
use std::time::Duration;

const GATEWAY_TIMEOUT_ARG: &str = "--gateway-timeout";
const BATCH_CONCURRENCY_ARG: &str = "--batch-concurrency";
const DEFAULT_BATCH_CONCURRENCY: usize = 1;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let session_state = match build_session_state() {
            Ok(state) => state,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };

        rocket_build
            .manage(session_state)
            .manage(SharedBatchStorage::default())
            .mount(
                "/api/",
                routes![
                    config_controller::get_config,
                    config_controller::save_config,
                    config_controller::test_connection,
                    config_controller::get_settings,
                    catalog_controller::get_templates,
                    catalog_controller::save_template,
                    catalog_controller::get_recipients,
                    catalog_controller::import_recipients_file,
                    catalog_controller::get_signatures,
                    catalog_controller::get_history,
                    mail_controller::send_mail,
                    mail_controller::check_send_safety,
                    mail_controller::expand_text,
                    mail_controller::match_recipient,
                    mail_controller::match_template,
                    attachment_controller::load_attachments,
                    batch_controller::start_batch,
                    batch_controller::get_batch,
                    batch_controller::cancel_batch,
                    version_controller::get_version,
                ],
            )
    }
}

fn build_session_state() -> Result<SessionState> {
    let timeout = retrieve_parsed_arg_value(GATEWAY_TIMEOUT_ARG, DEFAULT_TIMEOUT.as_secs());
    let concurrency = retrieve_parsed_arg_value(BATCH_CONCURRENCY_ARG, DEFAULT_BATCH_CONCURRENCY);
    let client = GatewayClient::new(Duration::from_secs(timeout))?;

    let state = SessionState::new(
        build_settings_store()?,
        client,
        DispatchOptions::new(concurrency),
    )?;
    Ok(state)
}

#[cfg(not(feature = "demo"))]
fn build_settings_store() -> ConfigResult<Box<dyn SettingsStore>> {
    Ok(Box::new(FileSettingsStore::from_environment()?))
}

#[cfg(feature = "demo")]
fn build_settings_store() -> ConfigResult<Box<dyn SettingsStore>> {
    let gas_url = crate::demo_mock_server::GATEWAY_MOCK_SERVER_URI
        .get()
        .cloned()
        .unwrap_or_default();
    Ok(Box::new(
        FileSettingsStore::from_environment()?.with_gas_url_override(gas_url),
    ))
}
