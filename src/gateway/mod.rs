use crate::merge::message::Message;
use dto::config::Config;
use dto::connection_test_response::ConnectionTestResponse;
use dto::send_mail_response::SendMailResponse;

pub mod catalog;
pub mod client;
pub mod error;
mod payload;

/// The remote endpoint mails are handed to.
/// Failures are reported in the returned responses, never as errors.
#[rocket::async_trait]
pub trait MailGateway: Send + Sync {
    async fn test_connection(&self, config: &Config) -> ConnectionTestResponse;

    async fn send_message(&self, config: &Config, message: &Message) -> SendMailResponse;
}
