use crate::config::error::ConfigError::{
    CantReadConfigFile, CantWriteConfigFile, MalformedConfigFile, NoConfigFolder,
};
use crate::error::ApplicationError;
use crate::gateway::error::GatewayError::{
    AuthenticationFailed, CantCreateClient, InvalidConfig, Timeout,
};
use log::error;
use rocket::http::Status;
use rocket::serde::json::json;

/// Failed API calls answer with a status and a JSON body: `{"error": "<message>"}`.
pub type ApiResult<T = String> = Result<T, (Status, String)>;

pub fn error_response<E: Into<ApplicationError>>(error: E) -> (Status, String) {
    let error = error.into();
    let status = status_of(&error);
    error!("Request failed [status: {status}]\n{error:#?}");
    (status, error_body(&error.to_string()))
}

pub fn error_body(message: &str) -> String {
    json!({ "error": message }).to_string()
}

fn status_of(error: &ApplicationError) -> Status {
    match error {
        ApplicationError::Config(
            NoConfigFolder
            | CantReadConfigFile { .. }
            | MalformedConfigFile { .. }
            | CantWriteConfigFile { .. },
        ) => Status::InternalServerError,
        ApplicationError::Config(_) => Status::BadRequest,
        ApplicationError::Gateway(InvalidConfig(_)) => Status::BadRequest,
        ApplicationError::Gateway(CantCreateClient) => Status::InternalServerError,
        ApplicationError::Gateway(Timeout) => Status::GatewayTimeout,
        ApplicationError::Gateway(AuthenticationFailed(_)) => Status::Unauthorized,
        ApplicationError::Gateway(_) => Status::BadGateway,
        ApplicationError::Merge(_) | ApplicationError::Import(_) => Status::UnprocessableEntity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError::MissingGatewayUrl;
    use crate::gateway::error::GatewayError;
    use crate::merge::error::MergeError::MissingAddress;
    use crate::recipient::error::ImportError::MissingEmailColumn;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        error = {
            ApplicationError::from(MissingGatewayUrl),
            ApplicationError::from(NoConfigFolder),
            ApplicationError::from(GatewayError::InvalidConfig(MissingGatewayUrl)),
            ApplicationError::from(GatewayError::Timeout),
            ApplicationError::from(GatewayError::AuthenticationFailed(401)),
            ApplicationError::from(GatewayError::Rejected("quota".to_owned())),
            ApplicationError::from(MissingEmailColumn),
            ApplicationError::from(MissingAddress),
        },
        expected_status = {
            Status::BadRequest,
            Status::InternalServerError,
            Status::BadRequest,
            Status::GatewayTimeout,
            Status::Unauthorized,
            Status::BadGateway,
            Status::UnprocessableEntity,
            Status::UnprocessableEntity,
        }
    )]
    fn should_map_error_to_status(error: ApplicationError, expected_status: Status) {
        assert_eq!(expected_status, status_of(&error));
    }

    #[test]
    fn should_answer_with_error_message() {
        let (status, body) = error_response(MissingGatewayUrl);

        assert_eq!(Status::BadRequest, status);
        assert_eq!(r#"{"error":"The gateway URL is not set."}"#, body);
    }
}
