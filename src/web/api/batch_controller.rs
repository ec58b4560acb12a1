use crate::config::validate_config;
use crate::gateway::client::GatewayClient;
use crate::merge::cancellation::Cancellation;
use crate::merge::dispatch::{DispatchOptions, dispatch_batch};
use crate::merge::signature::resolve_signature;
use crate::tools::log_message_and_return;
use crate::web::api::batch_storage::{BatchEntry, BatchStorage, SharedBatchStorage};
use crate::web::api::session_state::SessionState;
use crate::web::error::{ApiResult, error_body, error_response};
use chrono::Local;
use dto::batch::BatchReport;
use dto::config::Config;
use dto::requests::BatchRequest;
use log::{error, info};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{Json, json};
use std::sync::{Arc, MutexGuard};
use uuid::Uuid;

/// Start sending a template to many recipients.
/// The batch runs in the background: its id is returned right away, to follow it with `GET /batches/<id>`.
/// An invalid config is refused before anything is started.
#[post("/batches", format = "application/json", data = "<request>")]
pub async fn start_batch(
    session: &State<SessionState>,
    batches: &State<SharedBatchStorage>,
    request: Json<BatchRequest>,
) -> ApiResult<(Status, String)> {
    let config = session.config()?;
    validate_config(&config).map_err(error_response)?;

    let id = Uuid::new_v4().to_string();
    let cancellation = Cancellation::new();
    lock(batches)?.store(id.clone(), BatchEntry::Running(cancellation.clone()));

    rocket::tokio::spawn(run_batch(
        id.clone(),
        session.client().clone(),
        config,
        request.into_inner(),
        *session.dispatch_options(),
        cancellation,
        Arc::clone(batches.inner()),
    ));
    info!("Batch started [id: {id}]");

    Ok((Status::Accepted, json!({ "batchId": id }).to_string()))
}

#[get("/batches/<id>")]
pub fn get_batch(batches: &State<SharedBatchStorage>, id: &str) -> ApiResult {
    match lock(batches)?.get(id) {
        Some(entry) => Ok(json!(entry.status()).to_string()),
        None => Err(unknown_batch()),
    }
}

/// Ask a running batch to stop. Recipients already started still get their result.
#[delete("/batches/<id>")]
pub fn cancel_batch(batches: &State<SharedBatchStorage>, id: &str) -> ApiResult<Status> {
    match lock(batches)?.get(id) {
        Some(BatchEntry::Running(cancellation)) => {
            cancellation.cancel();
            info!("Batch cancellation requested [id: {id}]");
            Ok(Status::Accepted)
        }
        Some(_) => Err((Status::Conflict, error_body("The batch is already over."))),
        None => Err(unknown_batch()),
    }
}

async fn run_batch(
    id: String,
    client: GatewayClient,
    config: Config,
    request: BatchRequest,
    options: DispatchOptions,
    cancellation: Cancellation,
    batches: SharedBatchStorage,
) {
    let started_at = Local::now();
    let signature = resolve_signature(request.template(), request.signatures(), config.signature());
    let outcome = dispatch_batch(
        &client,
        &config,
        request.template(),
        request.recipients(),
        signature,
        request.attachments(),
        &options,
        &cancellation,
    )
    .await;

    let entry = match outcome {
        Ok(outcome) => {
            let report = BatchReport::new(
                id.as_str(),
                started_at,
                Local::now(),
                outcome.results().clone(),
                *outcome.cancelled(),
            );
            info!(
                "Batch finished [id: {id}, sent: {}, failed: {}, cancelled: {}]",
                report.sent_count(),
                report.failed_count(),
                report.cancelled()
            );
            BatchEntry::Completed(report)
        }
        Err(error) => {
            error!("Batch failed [id: {id}]: {error}");
            BatchEntry::Failed(error.to_string())
        }
    };
    match batches.lock() {
        Ok(mut batches) => batches.store(id, entry),
        Err(error) => error!("Can't store batch result [id: {id}]\n{error:#?}"),
    }
}

fn lock(batches: &SharedBatchStorage) -> ApiResult<MutexGuard<'_, BatchStorage>> {
    batches.lock().map_err(log_message_and_return(
        "Batch storage is poisoned.",
        (Status::InternalServerError, error_body("Batch storage is unavailable.")),
    ))
}

fn unknown_batch() -> (Status, String) {
    (Status::NotFound, error_body("Unknown batch."))
}
