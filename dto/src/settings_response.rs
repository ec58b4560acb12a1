use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

/// Settings kept by the gateway. Unknown keys are ignored.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct GatewaySettings {
    #[serde(
        deserialize_with = "deserialize_index",
        skip_serializing_if = "Option::is_none"
    )]
    selected_signature_index: Option<usize>,
}

impl GatewaySettings {
    pub fn new(selected_signature_index: Option<usize>) -> Self {
        Self {
            selected_signature_index,
        }
    }
}

/// The gateway stores its settings as spreadsheet cells: an index may come as a number or as text.
fn deserialize_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Index {
        Number(usize),
        Text(String),
    }

    Ok(match Option::<Index>::deserialize(deserializer)? {
        Some(Index::Number(index)) => Some(index),
        Some(Index::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Snapshot of the settings at load time.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct SettingsResponse {
    settings: GatewaySettings,
    signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SettingsResponse {
    pub fn new(
        settings: GatewaySettings,
        signature: impl Into<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            settings,
            signature: signature.into(),
            error,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }
}

impl Decode for SettingsResponse {}
