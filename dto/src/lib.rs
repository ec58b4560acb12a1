pub mod attachment;
pub mod batch;
pub mod config;
pub mod connection_test_response;
pub mod decode;
pub mod history_entry;
pub mod requests;
pub mod recipient;
pub mod send_mail_response;
pub mod settings_response;
pub mod signature;
pub mod template;
