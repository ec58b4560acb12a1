use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One line of the gateway's send log.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct HistoryEntry {
    date: String,
    to: String,
    subject: String,
    status: String,
}

impl HistoryEntry {
    pub fn new(
        date: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            to: to.into(),
            subject: subject.into(),
            status: status.into(),
        }
    }

    /// The gateway prefixes failed sends with `Error`.
    pub fn is_error(&self) -> bool {
        self.status.starts_with("Error")
    }
}

impl Decode for HistoryEntry {}
