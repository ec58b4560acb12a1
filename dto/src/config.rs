use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Settings of a send session: where the gateway lives and how to authenticate to it.
#[derive(Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct Config {
    gas_url: String,
    signature: String,
    basic_auth_id: String,
    basic_auth_pw: String,
}

impl Config {
    pub fn new(
        gas_url: impl Into<String>,
        signature: impl Into<String>,
        basic_auth_id: impl Into<String>,
        basic_auth_pw: impl Into<String>,
    ) -> Self {
        Self {
            gas_url: gas_url.into(),
            signature: signature.into(),
            basic_auth_id: basic_auth_id.into(),
            basic_auth_pw: basic_auth_pw.into(),
        }
    }

    pub fn with_gas_url(mut self, gas_url: impl Into<String>) -> Self {
        self.gas_url = gas_url.into();
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.basic_auth_id.is_empty() || !self.basic_auth_pw.is_empty()
    }

    /// Every non-empty field of `other` replaces the matching field of `self`.
    pub fn overlaid_with(self, other: Config) -> Self {
        fn pick(base: String, other: String) -> String {
            if other.is_empty() { base } else { other }
        }

        Self {
            gas_url: pick(self.gas_url, other.gas_url),
            signature: pick(self.signature, other.signature),
            basic_auth_id: pick(self.basic_auth_id, other.basic_auth_id),
            basic_auth_pw: pick(self.basic_auth_pw, other.basic_auth_pw),
        }
    }
}

impl Decode for Config {}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config {{gas_url={}, signature={}, basic_auth_id={}, basic_auth_pw=MASKED}}",
            self.gas_url, self.signature, self.basic_auth_id
        )
    }
}
