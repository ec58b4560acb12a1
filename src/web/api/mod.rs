mod attachment_controller;
mod batch_controller;
mod batch_storage;
mod catalog_controller;
mod config_controller;
mod mail_controller;
pub mod server;
pub mod session_state;
mod version_controller;
