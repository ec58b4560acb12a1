//! Mail merge: one message per recipient, built from a template and sent through the gateway.

pub mod attachment;
pub mod cancellation;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod placeholder;
pub mod signature;
