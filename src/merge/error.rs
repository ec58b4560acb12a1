use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum MergeError {
    #[error(
        "Recipient {recipient_id} expects template `{expected}`, not `{actual}`."
    )]
    TemplateMismatch {
        recipient_id: String,
        expected: String,
        actual: String,
    },
    #[error("Recipient {0} has no email address.")]
    MissingEmail(String),
    #[error("The mail has no recipient address.")]
    MissingAddress,
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum AttachmentError {
    #[error("The attachment has neither data nor file path.")]
    NoSource,
    #[error("The attachment is unavailable [path: {path}, reason: {reason}]")]
    Unavailable { path: String, reason: String },
    #[error("The attachment exceeds the gateway size limit [path: {path}, size: {size} bytes]")]
    TooLarge { path: String, size: u64 },
}
