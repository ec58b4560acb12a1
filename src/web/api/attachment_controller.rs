use crate::merge::attachment::load_attachment;
use crate::tools::log_message;
use rocket::serde::json::{Json, json};

/// Read the files picked by the user. Unreadable files are skipped.
#[post("/attachments", format = "application/json", data = "<paths>")]
pub async fn load_attachments(paths: Json<Vec<String>>) -> String {
    let mut attachments = Vec::with_capacity(paths.len());
    for path in paths.iter() {
        if let Ok(attachment) = load_attachment(path)
            .await
            .map_err(log_message("Skipping unreadable attachment."))
        {
            attachments.push(attachment);
        }
    }
    json!(attachments).to_string()
}
