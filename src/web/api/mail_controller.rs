use crate::gateway::MailGateway;
use crate::matching::file_name::{match_recipient_by_file_name, match_template_by_file_name};
use crate::matching::safety::validate_send_safety;
use crate::merge::attachment::resolve_available_attachments;
use crate::merge::error::MergeError::MissingAddress;
use crate::merge::message::Message;
use crate::merge::placeholder::expand;
use crate::web::api::session_state::SessionState;
use crate::web::error::{ApiResult, error_response};
use dto::requests::{
    ExpandRequest, MailRequest, RecipientMatchRequest, SafetyCheckRequest, TemplateMatchRequest,
};
use rocket::State;
use rocket::serde::json::{Json, json};

/// Send one message, already expanded by the caller.
/// Like the connection test, the gateway's outcome is in the body.
/// A mail without recipient address is refused before reaching the gateway.
#[post("/mail", format = "application/json", data = "<request>")]
pub async fn send_mail(session: &State<SessionState>, request: Json<MailRequest>) -> ApiResult {
    let config = session.config()?;
    let request = request.into_inner();
    let to = request.to().trim();
    if to.is_empty() {
        return Err(error_response(MissingAddress));
    }
    let attachments = resolve_available_attachments(request.attachments()).await;
    let message = Message::new(
        to.to_owned(),
        request.subject().clone(),
        request.body().clone(),
        attachments,
    );

    let response = session.client().send_message(&config, &message).await;
    Ok(json!(response).to_string())
}

#[post("/mail/safety", format = "application/json", data = "<request>")]
pub fn check_send_safety(request: Json<SafetyCheckRequest>) -> String {
    let warnings = validate_send_safety(
        request.recipient().as_ref(),
        request.attachments(),
        request.body(),
    );
    json!(warnings).to_string()
}

#[post("/mail/expand", format = "application/json", data = "<request>")]
pub fn expand_text(request: Json<ExpandRequest>) -> String {
    json!(expand(request.text(), request.recipient())).to_string()
}

/// Answer `null` when no recipient matches.
#[post("/match/recipient", format = "application/json", data = "<request>")]
pub fn match_recipient(request: Json<RecipientMatchRequest>) -> String {
    json!(match_recipient_by_file_name(request.file_name(), request.recipients())).to_string()
}

/// Answer `null` when no template matches.
#[post("/match/template", format = "application/json", data = "<request>")]
pub fn match_template(request: Json<TemplateMatchRequest>) -> String {
    json!(match_template_by_file_name(request.file_name(), request.templates())).to_string()
}
