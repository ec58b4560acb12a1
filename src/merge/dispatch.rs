use crate::config::error::ConfigError;
use crate::config::validate_config;
use crate::gateway::MailGateway;
use crate::merge::attachment::resolve_available_attachments;
use crate::merge::cancellation::Cancellation;
use crate::merge::message::{Message, build_message};
use derive_getters::Getters;
use dto::attachment::Attachment;
use dto::batch::RecipientResult;
use dto::config::Config;
use dto::recipient::Recipient;
use dto::send_mail_response::SendMailResponse;
use dto::signature::Signature;
use dto::template::Template;
use log::{error, info, trace, warn};
use rocket::futures::{StreamExt, future, stream};

#[derive(Debug, Clone, Copy, Getters, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Maximum number of gateway calls in flight. Never below 1.
    concurrency: usize,
}

impl DispatchOptions {
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One result per attempted recipient, in the recipients' order.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    results: Vec<RecipientResult>,
    cancelled: bool,
}

enum SendState {
    Pending,
    Built(Message),
    Sent(SendMailResponse),
}

impl SendState {
    fn label(&self) -> &'static str {
        match self {
            SendState::Pending => "pending",
            SendState::Built(_) => "built",
            SendState::Sent(_) => "sent",
        }
    }
}

/// Send `template` to every recipient through `gateway`.
///
/// Only an invalid config fails the batch, before any gateway call.
/// Any other failure is reported in the recipient's result and the batch goes on.
/// Cancellation is checked before each recipient is started: results obtained so far are kept.
#[allow(clippy::too_many_arguments)]
pub async fn dispatch_batch<G: MailGateway + ?Sized>(
    gateway: &G,
    config: &Config,
    template: &Template,
    recipients: &[Recipient],
    signature: Option<&Signature>,
    attachments: &[Attachment],
    options: &DispatchOptions,
    cancellation: &Cancellation,
) -> Result<BatchOutcome, ConfigError> {
    validate_config(config).inspect_err(|e| error!("Batch not started: {e}"))?;
    info!(
        "Dispatching batch [template: {}, recipients: {}, concurrency: {}]",
        template.id(),
        recipients.len(),
        options.concurrency
    );

    // Futures only start on their first poll: cancellation is checked on each recipient's turn.
    let sends: Vec<_> = recipients
        .iter()
        .map(|recipient| async move {
            if cancellation.is_cancelled() {
                return None;
            }
            let response =
                send_to_recipient(gateway, config, template, recipient, signature, attachments)
                    .await;
            Some(RecipientResult::new(recipient.id().as_str(), response))
        })
        .collect();
    let results: Vec<RecipientResult> = stream::iter(sends)
        .buffered(options.concurrency)
        .filter_map(future::ready)
        .collect()
        .await;

    let cancelled = results.len() < recipients.len();
    info!(
        "Batch dispatched [results: {}, cancelled: {cancelled}]",
        results.len()
    );

    Ok(BatchOutcome { results, cancelled })
}

async fn send_to_recipient<G: MailGateway + ?Sized>(
    gateway: &G,
    config: &Config,
    template: &Template,
    recipient: &Recipient,
    signature: Option<&Signature>,
    attachments: &[Attachment],
) -> SendMailResponse {
    let mut state = SendState::Pending;
    loop {
        trace!("Recipient {} is {}", recipient.id(), state.label());
        state = match state {
            SendState::Pending => {
                let attachments = resolve_available_attachments(attachments).await;
                match build_message(template, recipient, signature, attachments) {
                    Ok(message) => SendState::Built(message),
                    Err(e) => {
                        warn!("Can't build message for recipient {}: {e}", recipient.id());
                        SendState::Sent(SendMailResponse::failure(e.to_string()))
                    }
                }
            }
            SendState::Built(message) => {
                SendState::Sent(gateway.send_message(config, &message).await)
            }
            SendState::Sent(response) => return response,
        };
    }
}
