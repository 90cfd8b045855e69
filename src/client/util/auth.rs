use reqwasm::http::Request;

use crate::client::util::request;
use crate::model::auth::{LoginRequest, LoginResponseDto, RegistrationDraft};

/// Exchange credentials for a session token and role
pub async fn login(credentials: &LoginRequest) -> Result<LoginResponseDto, String> {
    let body = serde_json::to_string(credentials)
        .map_err(|e| format!("Failed to serialize credentials: {}", e))?;

    let response = Request::post("/api/auth/login")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let session = response
                .json::<LoginResponseDto>()
                .await
                .map_err(|e| format!("Failed to parse login response: {}", e))?;
            Ok(session)
        }
        _ => Err(request::error_message(response).await),
    }
}

/// Create a new account
pub async fn register(draft: &RegistrationDraft) -> Result<(), String> {
    let body = serde_json::to_string(draft)
        .map_err(|e| format!("Failed to serialize registration: {}", e))?;

    let response = Request::post("/api/auth/register")
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
