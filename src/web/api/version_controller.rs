use rocket::serde::json::json;
use std::env::consts::{ARCH, OS};

const UNKNOWN: &str = "unknown";

/// Build information, shown in the GUI's about box.
/// The commit hash is only known when `AUTO_MAIL_PILOT_COMMIT_HASH` is set at build time.
#[get("/version")]
pub fn get_version() -> String {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "commitHash": option_env!("AUTO_MAIL_PILOT_COMMIT_HASH").unwrap_or(UNKNOWN),
        "os": OS,
        "arch": ARCH,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::Value;

    #[async_test]
    async fn should_get_version() {
        let rocket = rocket::build().mount("/", routes![get_version]);
        let client = Client::tracked(rocket).await.unwrap();

        let response = client.get("/version").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
        assert_eq!(env!("CARGO_PKG_VERSION"), body["version"]);
        assert_eq!(OS, body["os"]);
        assert_eq!(ARCH, body["arch"]);
        assert!(body["commitHash"].is_string());
    }
}
