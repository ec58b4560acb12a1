use crate::config::{gateway_url, validate_config};
use crate::gateway::MailGateway;
use crate::gateway::error::GatewayError::{
    AuthenticationFailed, MalformedResponse, Rejected, TooManyRedirects,
};
use crate::gateway::error::{GatewayError, Result};
use crate::gateway::payload::SendMailPayload;
use crate::merge::message::Message;
use crate::tools::web::build_client;
use dto::config::Config;
use dto::connection_test_response::ConnectionTestResponse;
use dto::decode::Decode;
use dto::send_mail_response::SendMailResponse;
use log::{debug, error, info, warn};
use reqwest::header::LOCATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const TEST_ACTION: &str = "test";
const MAX_REDIRECTS: usize = 10;

/// HTTP client of the gateway.
/// Every call is authenticated with the config's basic auth credentials, when set.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }

    pub(crate) async fn get(&self, config: &Config, action: &str) -> Result<String> {
        let url = gateway_url(config)?;
        debug!("Calling gateway [action: {action}]");
        let request = self.client.get(url).query(&[("action", action)]);
        self.execute(config, request).await
    }

    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        config: &Config,
        payload: &T,
    ) -> Result<String> {
        let url = gateway_url(config)?;
        let request = self.client.post(url).json(payload);
        self.execute(config, request).await
    }

    async fn execute(&self, config: &Config, request: RequestBuilder) -> Result<String> {
        let response = authenticate(request, config)
            .send()
            .await
            .map_err(transport_error)?;
        let response = self.follow_redirects(config, response).await?;
        read_body(response).await
    }

    /// The gateway stores a POST result, then redirects to the page holding it.
    /// That page is fetched with GET, still authenticated.
    async fn follow_redirects(&self, config: &Config, mut response: Response) -> Result<Response> {
        let mut redirects = 0;
        while is_redirect(response.status()) {
            if redirects == MAX_REDIRECTS {
                error!("Gateway redirected more than {MAX_REDIRECTS} times");
                return Err(TooManyRedirects);
            }
            redirects += 1;

            let location = redirect_location(&response)?;
            debug!("Following gateway redirect [hop: {redirects}]");
            response = authenticate(self.client.get(location), config)
                .send()
                .await
                .map_err(transport_error)?;
        }

        Ok(response)
    }
}

#[rocket::async_trait]
impl MailGateway for GatewayClient {
    async fn test_connection(&self, config: &Config) -> ConnectionTestResponse {
        info!("Testing connection to gateway");
        if let Err(error) = validate_config(config) {
            return ConnectionTestResponse::failure(error.to_string());
        }

        let response = match self.get(config, TEST_ACTION).await {
            Ok(body) => read_connection_acknowledgement(&body),
            Err(error) => ConnectionTestResponse::failure(error.to_string()),
        };
        info!("Connection test done [success: {}]", response.is_success());
        response
    }

    async fn send_message(&self, config: &Config, message: &Message) -> SendMailResponse {
        debug!(
            "Sending mail [to: {}, subject: {}, attachments: {}]",
            message.to(),
            message.subject(),
            message.attachments().len()
        );

        let response = match self.post(config, &SendMailPayload::from(message)).await {
            Ok(body) => read_send_acknowledgement(&body),
            Err(error) => SendMailResponse::failure(error.to_string()),
        };
        if response.is_success() {
            info!("Mail sent [to: {}]", message.to());
        } else {
            warn!("Mail not sent [to: {}, error: {:?}]", message.to(), response.error());
        }
        response
    }
}

fn authenticate(request: RequestBuilder, config: &Config) -> RequestBuilder {
    if config.has_credentials() {
        request.basic_auth(config.basic_auth_id(), Some(config.basic_auth_pw()))
    } else {
        request
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    error!("Gateway call failed\n{error:#?}");
    GatewayError::from(error)
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER
    )
}

fn redirect_location(response: &Response) -> Result<Url> {
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|location| location.to_str().ok())
        .ok_or_else(|| MalformedResponse("redirect without location".to_owned()))?;

    response
        .url()
        .join(location)
        .map_err(|e| MalformedResponse(format!("redirect to `{location}`: {e}")))
}

async fn read_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    if status.is_success() {
        return Ok(body);
    }

    error!("Gateway answered with status {status}");
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(AuthenticationFailed(status.as_u16()))
        }
        _ => Err(Rejected(format!("HTTP {}: {}", status.as_u16(), body.trim()))),
    }
}

/// Only an explicit `success: true` acknowledges the connection.
fn read_connection_acknowledgement(body: &str) -> ConnectionTestResponse {
    match ConnectionTestResponse::decode_str(body) {
        Ok(response) if response.is_success() => response,
        Ok(response) => ConnectionTestResponse::failure(
            response
                .error()
                .clone()
                .unwrap_or_else(|| "The gateway refused the connection test.".to_owned()),
        ),
        Err(error) => {
            warn!("Unexpected connection test answer\n{error:#?}");
            ConnectionTestResponse::failure(MalformedResponse(error.to_string()).to_string())
        }
    }
}

/// A mail is accepted when the gateway says `success: true` without any error.
fn read_send_acknowledgement(body: &str) -> SendMailResponse {
    match SendMailResponse::decode_str(body) {
        Ok(response) if response.is_success() && response.error().is_none() => response,
        Ok(response) => SendMailResponse::failure(
            response
                .error()
                .clone()
                .unwrap_or_else(|| "Unknown error".to_owned()),
        ),
        Err(error) => {
            warn!("Unexpected send answer\n{error:#?}");
            SendMailResponse::failure(MalformedResponse(error.to_string()).to_string())
        }
    }
}
