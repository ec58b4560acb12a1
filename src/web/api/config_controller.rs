use crate::config::settings::load_settings;
use crate::gateway::MailGateway;
use crate::web::api::session_state::SessionState;
use crate::web::error::ApiResult;
use dto::config::Config;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};

#[get("/config")]
pub async fn get_config(session: &State<SessionState>) -> ApiResult {
    Ok(json!(session.config()?).to_string())
}

#[put("/config", format = "application/json", data = "<config>")]
pub async fn save_config(session: &State<SessionState>, config: Json<Config>) -> ApiResult<Status> {
    session.save_config(config.into_inner())?;
    Ok(Status::NoContent)
}

/// Probe the gateway with the current config.
/// The outcome is in the body: the call itself succeeds even when the gateway can't be reached.
#[post("/connection/test")]
pub async fn test_connection(session: &State<SessionState>) -> ApiResult {
    let config = session.config()?;
    let response = session.client().test_connection(&config).await;
    Ok(json!(response).to_string())
}

#[get("/settings")]
pub async fn get_settings(session: &State<SessionState>) -> String {
    let settings = load_settings(session.store(), session.client()).await;
    json!(settings).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::client::tests::{GAS_PATH, LOGIN, PASSWORD};
    use crate::web::api::session_state::tests::build_test_session;
    use dto::connection_test_response::ConnectionTestResponse;
    use dto::decode::Decode;
    use dto::settings_response::SettingsResponse;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn build_client(config: Config) -> Client {
        let rocket = rocket::build()
            .manage(build_test_session(config))
            .mount(
                "/",
                routes![get_config, save_config, test_connection, get_settings],
            );
        Client::tracked(rocket).await.unwrap()
    }

    #[async_test]
    async fn should_get_config() {
        let config = Config::new("https://gas", "Sales", "id", "pw");
        let client = build_client(config.clone()).await;

        let response = client.get("/config").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let body = response.into_string().await.unwrap();
        assert_eq!(config, Config::decode_str(&body).unwrap());
    }

    #[async_test]
    async fn should_save_config() {
        let client = build_client(Config::default()).await;
        let config = Config::new("https://gas", "Sales", "", "");

        let response = client
            .put("/config")
            .header(ContentType::JSON)
            .body(json!(config).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::NoContent, response.status());

        let body = client.get("/config").dispatch().await.into_string().await.unwrap();
        assert_eq!(config, Config::decode_str(&body).unwrap());
    }

    #[async_test]
    async fn should_not_save_malformed_config() {
        let client = build_client(Config::default()).await;

        let response = client
            .put("/config")
            .header(ContentType::JSON)
            .body(json!(Config::new("ftp://gas", "", "", "")).to_string())
            .dispatch()
            .await;

        assert_eq!(Status::BadRequest, response.status());
    }

    #[async_test]
    async fn should_report_wrong_password() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "test"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;
        let config = Config::new(
            format!("{}{GAS_PATH}", mock_server.uri()),
            "",
            LOGIN,
            "wrong password",
        );
        let client = build_client(config).await;

        let response = client.post("/connection/test").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let body = response.into_string().await.unwrap();
        let response = ConnectionTestResponse::decode_str(&body).unwrap();
        assert!(!response.is_success());
        assert!(
            response
                .error()
                .as_ref()
                .unwrap()
                .starts_with("Authentication to the gateway failed")
        );
    }

    #[async_test]
    async fn should_get_settings() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("action", "getSettings"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"settings": {"selected_signature_index": 1}})),
            )
            .mount(&mock_server)
            .await;
        let config = Config::new(
            format!("{}{GAS_PATH}", mock_server.uri()),
            "Sales",
            LOGIN,
            PASSWORD,
        );
        let client = build_client(config).await;

        let response = client.get("/settings").dispatch().await;

        let body = response.into_string().await.unwrap();
        let settings = SettingsResponse::decode_str(&body).unwrap();
        assert_eq!("Sales", settings.signature());
        assert_eq!(&Some(1), settings.settings().selected_signature_index());
    }
}
