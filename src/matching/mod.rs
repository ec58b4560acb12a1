//! Checks helping the user pair files, recipients and templates before sending.

pub mod file_name;
pub mod safety;
