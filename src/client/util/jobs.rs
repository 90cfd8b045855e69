use reqwasm::http::Request;

use crate::client::util::request;
use crate::model::job::{CreateJobRequest, JobDto};

/// Retrieve the full job collection from the API
pub async fn fetch_jobs() -> Result<Vec<JobDto>, String> {
    let response = Request::get("/api/jobs")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let jobs = response
                .json::<Vec<JobDto>>()
                .await
                .map_err(|e| format!("Failed to parse job listings: {}", e))?;
            Ok(jobs)
        }
        404 => Ok(Vec::new()),
        _ => Err(request::error_message(response).await),
    }
}

/// Retrieve a single job by id from the API
pub async fn fetch_job(job_id: i64) -> Result<JobDto, String> {
    let response = Request::get(&format!("/api/jobs/{}", job_id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let job = response
                .json::<JobDto>()
                .await
                .map_err(|e| format!("Failed to parse job data: {}", e))?;
            Ok(job)
        }
        _ => Err(request::error_message(response).await),
    }
}

/// Post a new listing on behalf of the logged-in employer
pub async fn create_job(job: &CreateJobRequest, employer_email: &str) -> Result<(), String> {
    let body =
        serde_json::to_string(job).map_err(|e| format!("Failed to serialize job: {}", e))?;

    let response = Request::post(&format!(
        "/api/jobs/create?employerEmail={}",
        employer_email
    ))
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
