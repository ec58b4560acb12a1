use crate::send_mail_response::SendMailResponse;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome of the send to one recipient of a batch.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResult {
    recipient_id: String,
    #[serde(flatten)]
    response: SendMailResponse,
}

impl RecipientResult {
    pub fn new(recipient_id: impl Into<String>, response: SendMailResponse) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            response,
        }
    }
}

/// Everything a finished batch produced, in the recipients' order.
/// `cancelled` is set when the batch was stopped before every recipient was attempted.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    batch_id: String,
    started_at: DateTime<Local>,
    finished_at: DateTime<Local>,
    results: Vec<RecipientResult>,
    cancelled: bool,
}

impl BatchReport {
    pub fn new(
        batch_id: impl Into<String>,
        started_at: DateTime<Local>,
        finished_at: DateTime<Local>,
        results: Vec<RecipientResult>,
        cancelled: bool,
    ) -> Self {
        Self {
            batch_id: batch_id.into(),
            started_at,
            finished_at,
            results,
            cancelled,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.response.is_success())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.sent_count()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum BatchStatus {
    Running,
    Completed { report: BatchReport },
    Failed { error: String },
}
