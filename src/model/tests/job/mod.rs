mod create_job_draft;
mod matches_search;

use crate::model::job::JobDto;

/// Builds a posting with the given title, location, and salary.
pub(crate) fn job(id: i64, title: &str, location: &str, salary: f64) -> JobDto {
    JobDto {
        id,
        title: title.to_string(),
        description: String::new(),
        location: location.to_string(),
        salary,
        company: None,
        is_new: false,
    }
}
