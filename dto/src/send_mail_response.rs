use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome of sending one message.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct SendMailResponse {
    #[serde(default)]
    #[getter(skip)]
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SendMailResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl Decode for SendMailResponse {}
