use reqwasm::http::Request;

use crate::client::util::request;
use crate::model::application::ApplicationRequest;

/// Submit a completed application for a job
pub async fn submit_application(application: &ApplicationRequest) -> Result<(), String> {
    let body = serde_json::to_string(application)
        .map_err(|e| format!("Failed to serialize application: {}", e))?;

    let response = Request::post("/api/applications/apply")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => Ok(()),
        _ => Err(request::error_message(response).await),
    }
}
