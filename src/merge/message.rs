use crate::merge::attachment::ResolvedAttachment;
use crate::merge::error::MergeError;
use crate::merge::error::MergeError::{MissingEmail, TemplateMismatch};
use crate::merge::placeholder::expand;
use derive_getters::Getters;
use dto::recipient::Recipient;
use dto::signature::Signature;
use dto::template::Template;
use log::trace;

const SIGNATURE_SEPARATOR: &str = "\n\n";

/// A message ready to be handed to the gateway. It holds everything needed to send it.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct Message {
    to: String,
    subject: String,
    body: String,
    attachments: Vec<ResolvedAttachment>,
}

impl Message {
    pub fn new(
        to: String,
        subject: String,
        body: String,
        attachments: Vec<ResolvedAttachment>,
    ) -> Self {
        Self {
            to,
            subject,
            body,
            attachments,
        }
    }
}

/// Build the message of `recipient`: template expanded, signature appended after a blank line.
pub fn build_message(
    template: &Template,
    recipient: &Recipient,
    signature: Option<&Signature>,
    attachments: Vec<ResolvedAttachment>,
) -> Result<Message, MergeError> {
    if recipient.template_id() != template.id() {
        return Err(TemplateMismatch {
            recipient_id: recipient.id().clone(),
            expected: recipient.template_id().clone(),
            actual: template.id().clone(),
        });
    }
    if !recipient.has_email() {
        return Err(MissingEmail(recipient.id().clone()));
    }

    let subject = expand(template.subject(), recipient);
    let mut body = expand(template.body(), recipient);
    if let Some(signature) = signature.filter(|signature| !signature.content().trim().is_empty()) {
        trace!("Appending signature `{}`", signature.name());
        body.push_str(SIGNATURE_SEPARATOR);
        body.push_str(signature.content());
    }

    Ok(Message::new(
        recipient.email().trim().to_owned(),
        subject,
        body,
        attachments,
    ))
}
