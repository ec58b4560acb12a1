//! Data the gateway keeps in its spreadsheet: templates, recipients, signatures, settings and send history.

use crate::gateway::client::GatewayClient;
use crate::gateway::error::GatewayError::{MalformedResponse, Rejected};
use crate::gateway::error::Result;
use crate::gateway::payload::{
    HistoryEnvelope, RecipientsEnvelope, SaveTemplatePayload, SignaturesEnvelope,
    TemplatesEnvelope,
};
use dto::config::Config;
use dto::decode::Decode;
use dto::history_entry::HistoryEntry;
use dto::recipient::Recipient;
use dto::send_mail_response::SendMailResponse;
use dto::settings_response::SettingsResponse;
use dto::signature::Signature;
use dto::template::Template;
use log::{debug, info};

const GET_TEMPLATES_ACTION: &str = "getTemplates";
const GET_RECIPIENTS_ACTION: &str = "getRecipients";
const GET_SIGNATURES_ACTION: &str = "getSignatures";
const GET_SETTINGS_ACTION: &str = "getSettings";
const GET_HISTORY_ACTION: &str = "getHistory";

impl GatewayClient {
    pub async fn get_templates(&self, config: &Config) -> Result<Vec<Template>> {
        let envelope: TemplatesEnvelope = self.fetch(config, GET_TEMPLATES_ACTION).await?;
        reject_on_error(envelope.error)?;
        info!("Templates retrieved [count: {}]", envelope.templates.len());
        Ok(envelope.templates)
    }

    pub async fn get_recipients(&self, config: &Config) -> Result<Vec<Recipient>> {
        let envelope: RecipientsEnvelope = self.fetch(config, GET_RECIPIENTS_ACTION).await?;
        reject_on_error(envelope.error)?;
        info!("Recipients retrieved [count: {}]", envelope.recipients.len());
        Ok(envelope.recipients)
    }

    pub async fn get_signatures(&self, config: &Config) -> Result<Vec<Signature>> {
        let envelope: SignaturesEnvelope = self.fetch(config, GET_SIGNATURES_ACTION).await?;
        reject_on_error(envelope.error)?;
        info!("Signatures retrieved [count: {}]", envelope.signatures.len());
        Ok(envelope.signatures)
    }

    pub async fn get_settings(&self, config: &Config) -> Result<SettingsResponse> {
        let settings: SettingsResponse = self.fetch(config, GET_SETTINGS_ACTION).await?;
        reject_on_error(settings.error().clone())?;
        Ok(settings)
    }

    pub async fn get_history(&self, config: &Config) -> Result<Vec<HistoryEntry>> {
        let envelope: HistoryEnvelope = self.fetch(config, GET_HISTORY_ACTION).await?;
        reject_on_error(envelope.error)?;
        let errors = envelope.history.iter().filter(|entry| entry.is_error()).count();
        info!(
            "History retrieved [count: {}, errors: {errors}]",
            envelope.history.len()
        );
        Ok(envelope.history)
    }

    /// Create or replace a template, keyed by its id.
    pub async fn save_template(&self, config: &Config, template: &Template) -> Result<()> {
        debug!("Saving template [id: {}]", template.id());
        let body = self.post(config, &SaveTemplatePayload::from(template)).await?;
        let response =
            SendMailResponse::decode_str(&body).map_err(|e| MalformedResponse(e.to_string()))?;
        if !response.is_success() || response.error().is_some() {
            return Err(Rejected(
                response
                    .error()
                    .clone()
                    .unwrap_or_else(|| "Unknown error".to_owned()),
            ));
        }

        info!("Template saved [id: {}]", template.id());
        Ok(())
    }

    async fn fetch<T: Decode>(&self, config: &Config, action: &str) -> Result<T> {
        let body = self.get(config, action).await?;
        T::decode_str(&body).map_err(|e| MalformedResponse(e.to_string()))
    }
}

fn reject_on_error(error: Option<String>) -> Result<()> {
    match error {
        Some(error) if !error.is_empty() => Err(Rejected(error)),
        _ => Ok(()),
    }
}
