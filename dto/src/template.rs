use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A mail template. `subject` and `body` may hold `{{key}}` placeholders,
/// `signature` names the [crate::signature::Signature] to append, if any.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct Template {
    id: String,
    name: String,
    subject: String,
    body: String,
    signature: String,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject: subject.into(),
            body: body.into(),
            signature: signature.into(),
        }
    }
}

impl Decode for Template {}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn get_test_template() -> Template {
        Template::new(
            "t1",
            "Greetings",
            "Hi {{name}}",
            "Dear {{name}} at {{company}}",
            "",
        )
    }
}
