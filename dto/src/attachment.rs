use crate::decode::Decode;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// A file to attach to every message of a send.
/// `data` holds the base64-encoded content. When empty, the content is read from `file_path`.
#[derive(Getters, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    file_path: String,
    file_name: String,
    enabled: bool,
    data: String,
    mime_type: String,
}

impl Attachment {
    pub fn new(
        file_path: impl Into<String>,
        file_name: impl Into<String>,
        enabled: bool,
        data: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            file_name: file_name.into(),
            enabled,
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

impl Decode for Attachment {}

impl Debug for Attachment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Attachment {{file_path={}, file_name={}, enabled={}, data={} chars, mime_type={}}}",
            self.file_path,
            self.file_name,
            self.enabled,
            self.data.len(),
            self.mime_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_print_data_in_debug() {
        let attachment =
            Attachment::new("/tmp/a.pdf", "a.pdf", true, "SGVsbG8=", "application/pdf");

        let debug = format!("{attachment:?}");

        assert!(!debug.contains("SGVsbG8="));
        assert!(debug.contains("data=8 chars"));
    }

    #[test]
    fn should_deserialize_from_camel_case_keys() {
        let json = r#"{"filePath": "/tmp/a.pdf", "fileName": "a.pdf", "enabled": true, "mimeType": "application/pdf"}"#;

        let attachment: Attachment = serde_json::from_str(json).unwrap();

        assert_eq!(
            Attachment::new("/tmp/a.pdf", "a.pdf", true, "", "application/pdf"),
            attachment
        );
        assert!(!attachment.has_data());
    }
}
