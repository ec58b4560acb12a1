use crate::recipient::import::import_recipients;
use crate::tools::log_message_and_return;
use crate::web::api::session_state::SessionState;
use crate::web::error::{ApiResult, error_body, error_response};
use dto::template::Template;
use rocket::State;
use rocket::data::{Data, ToByteUnit};
use rocket::http::Status;
use rocket::serde::json::{Json, json};

const MAX_CSV_SIZE_IN_MEBIBYTES: u64 = 2;

#[get("/templates")]
pub async fn get_templates(session: &State<SessionState>) -> ApiResult {
    let config = session.config()?;
    let templates = session
        .client()
        .get_templates(&config)
        .await
        .map_err(error_response)?;
    Ok(json!(templates).to_string())
}

#[put("/templates", format = "application/json", data = "<template>")]
pub async fn save_template(
    session: &State<SessionState>,
    template: Json<Template>,
) -> ApiResult<Status> {
    let config = session.config()?;
    session
        .client()
        .save_template(&config, &template)
        .await
        .map_err(error_response)?;
    Ok(Status::NoContent)
}

#[get("/recipients")]
pub async fn get_recipients(session: &State<SessionState>) -> ApiResult {
    let config = session.config()?;
    let recipients = session
        .client()
        .get_recipients(&config)
        .await
        .map_err(error_response)?;
    Ok(json!(recipients).to_string())
}

#[get("/signatures")]
pub async fn get_signatures(session: &State<SessionState>) -> ApiResult {
    let config = session.config()?;
    let signatures = session
        .client()
        .get_signatures(&config)
        .await
        .map_err(error_response)?;
    Ok(json!(signatures).to_string())
}

#[get("/history")]
pub async fn get_history(session: &State<SessionState>) -> ApiResult {
    let config = session.config()?;
    let history = session
        .client()
        .get_history(&config)
        .await
        .map_err(error_response)?;
    Ok(json!(history).to_string())
}

/// Read recipients from the CSV file sent as body.
#[post("/recipients/import", data = "<content>")]
pub async fn import_recipients_file(content: Data<'_>) -> ApiResult {
    let content = content
        .open(MAX_CSV_SIZE_IN_MEBIBYTES.mebibytes())
        .into_bytes()
        .await
        .map_err(log_message_and_return(
            "Can't read uploaded recipients file.",
            (Status::BadRequest, error_body("The file can't be read.")),
        ))?;
    if !content.is_complete() {
        return Err((
            Status::PayloadTooLarge,
            error_body(&format!("The file exceeds {MAX_CSV_SIZE_IN_MEBIBYTES} MiB.")),
        ));
    }

    let recipients = import_recipients(&content.into_inner()).map_err(error_response)?;
    Ok(json!(recipients).to_string())
}
