//! Request bodies sent by the GUI to the local API.

use crate::attachment::Attachment;
use crate::recipient::Recipient;
use crate::signature::Signature;
use crate::template::Template;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single, already-expanded message.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MailRequest {
    to: String,
    subject: String,
    body: String,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl MailRequest {
    pub fn new(to: String, subject: String, body: String, attachments: Vec<Attachment>) -> Self {
        Self {
            to,
            subject,
            body,
            attachments,
        }
    }
}

/// One template sent to many recipients.
/// The signature is picked from `signatures` by the template's signature name,
/// or by the configured default signature.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    template: Template,
    recipients: Vec<Recipient>,
    #[serde(default)]
    signatures: Vec<Signature>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl BatchRequest {
    pub fn new(
        template: Template,
        recipients: Vec<Recipient>,
        signatures: Vec<Signature>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            template,
            recipients,
            signatures,
            attachments,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCheckRequest {
    recipient: Option<Recipient>,
    #[serde(default)]
    attachments: Vec<Attachment>,
    #[serde(default)]
    body: String,
}

impl SafetyCheckRequest {
    pub fn new(recipient: Option<Recipient>, attachments: Vec<Attachment>, body: String) -> Self {
        Self {
            recipient,
            attachments,
            body,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipientMatchRequest {
    file_name: String,
    recipients: Vec<Recipient>,
}

impl RecipientMatchRequest {
    pub fn new(file_name: String, recipients: Vec<Recipient>) -> Self {
        Self {
            file_name,
            recipients,
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMatchRequest {
    file_name: String,
    templates: Vec<Template>,
}

impl TemplateMatchRequest {
    pub fn new(file_name: String, templates: Vec<Template>) -> Self {
        Self {
            file_name,
            templates,
        }
    }
}

/// Preview of a text once expanded for a recipient.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExpandRequest {
    text: String,
    recipient: Recipient,
}

impl ExpandRequest {
    pub fn new(text: String, recipient: Recipient) -> Self {
        Self { text, recipient }
    }
}
