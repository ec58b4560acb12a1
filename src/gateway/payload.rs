//! Bodies exchanged with the gateway.

use crate::merge::message::Message;
use dto::decode::Decode;
use dto::history_entry::HistoryEntry;
use dto::recipient::Recipient;
use dto::signature::Signature;
use dto::template::Template;
use serde::{Deserialize, Serialize};

pub const SEND_MAIL_ACTION: &str = "sendMail";
pub const SAVE_TEMPLATE_ACTION: &str = "saveTemplate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentPayload<'a> {
    file_name: &'a str,
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendMailPayload<'a> {
    action: &'static str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
    attachments: Vec<AttachmentPayload<'a>>,
}

impl<'a> From<&'a Message> for SendMailPayload<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            action: SEND_MAIL_ACTION,
            to: message.to(),
            subject: message.subject(),
            body: message.body(),
            attachments: message
                .attachments()
                .iter()
                .map(|attachment| AttachmentPayload {
                    file_name: attachment.file_name(),
                    mime_type: attachment.mime_type(),
                    data: attachment.data(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveTemplatePayload<'a> {
    action: &'static str,
    id: &'a str,
    name: &'a str,
    subject: &'a str,
    body: &'a str,
}

impl<'a> From<&'a Template> for SaveTemplatePayload<'a> {
    fn from(template: &'a Template) -> Self {
        Self {
            action: SAVE_TEMPLATE_ACTION,
            id: template.id(),
            name: template.name(),
            subject: template.subject(),
            body: template.body(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TemplatesEnvelope {
    pub templates: Vec<Template>,
    pub error: Option<String>,
}

impl Decode for TemplatesEnvelope {}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RecipientsEnvelope {
    pub recipients: Vec<Recipient>,
    pub error: Option<String>,
}

impl Decode for RecipientsEnvelope {}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SignaturesEnvelope {
    pub signatures: Vec<Signature>,
    pub error: Option<String>,
}

impl Decode for SignaturesEnvelope {}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct HistoryEnvelope {
    pub history: Vec<HistoryEntry>,
    pub error: Option<String>,
}

impl Decode for HistoryEnvelope {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::attachment::ResolvedAttachment;
    use serde_json::json;

    #[test]
    fn should_serialize_send_mail_payload() {
        let message = Message::new(
            "a@acme.com".to_owned(),
            "Hi Ana".to_owned(),
            "Dear Ana".to_owned(),
            vec![ResolvedAttachment::new(
                "quote.pdf".to_owned(),
                "application/pdf".to_owned(),
                "SGVsbG8=".to_owned(),
            )],
        );

        let json = serde_json::to_value(SendMailPayload::from(&message)).unwrap();

        assert_eq!(
            json!({
                "action": "sendMail",
                "to": "a@acme.com",
                "subject": "Hi Ana",
                "body": "Dear Ana",
                "attachments": [{"fileName": "quote.pdf", "mimeType": "application/pdf", "data": "SGVsbG8="}]
            }),
            json
        );
    }
}
