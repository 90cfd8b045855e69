use reqwasm::http::Response;

use crate::model::api::ErrorDto;

/// Extracts a displayable message from a failed response, preferring the
/// API's JSON error envelope and falling back to the raw body text.
pub async fn error_message(response: Response) -> String {
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_dto.error
        )
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!(
            "Request failed with status {}: {}",
            response.status(),
            error_text
        )
    }
}
