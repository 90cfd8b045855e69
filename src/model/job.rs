use serde::{Deserialize, Serialize};

/// Salary floor for the fixed high-salary filter.
pub const HIGH_SALARY_THRESHOLD: f64 = 50_000.0;

/// A job posting as returned by the API. Read-only from the client's
/// perspective except for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
}

/// The three fixed filter predicates of the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobFilter {
    #[default]
    All,
    Remote,
    HighSalary,
}

impl JobFilter {
    pub const ALL: [JobFilter; 3] = [Self::All, Self::Remote, Self::HighSalary];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All jobs",
            Self::Remote => "Remote",
            Self::HighSalary => "High salary",
        }
    }

    pub fn matches(self, job: &JobDto) -> bool {
        match self {
            Self::All => true,
            Self::Remote => job.location.to_lowercase().contains("remote"),
            Self::HighSalary => job.salary > HIGH_SALARY_THRESHOLD,
        }
    }
}

/// Case-insensitive substring match over title, description, and
/// location. An empty search term matches everything.
pub fn matches_search(job: &JobDto, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();

    job.title.to_lowercase().contains(&term)
        || job.description.to_lowercase().contains(&term)
        || job.location.to_lowercase().contains(&term)
}

/// The combined listing predicate: search term AND active filter.
/// Recomputed on every keystroke or filter change.
pub fn filter_jobs<'a>(jobs: &'a [JobDto], term: &str, filter: JobFilter) -> Vec<&'a JobDto> {
    jobs.iter()
        .filter(|job| matches_search(job, term) && filter.matches(job))
        .collect()
}

/// The job-creation form's transient state. Salary is kept as the raw
/// input string until submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateJobDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
}

/// Body of the create-job request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: f64,
}

impl CreateJobDraft {
    /// Converts the draft into a request payload, rejecting blank fields
    /// and non-numeric or negative salaries with the message to display.
    pub fn to_request(&self) -> Result<CreateJobRequest, String> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.location.trim().is_empty()
            || self.salary.trim().is_empty()
        {
            return Err("Please fill in all fields".to_string());
        }

        let salary: f64 = self
            .salary
            .trim()
            .parse()
            .map_err(|_| "Salary must be a number".to_string())?;
        if salary < 0.0 {
            return Err("Salary must not be negative".to_string());
        }

        Ok(CreateJobRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            salary,
        })
    }
}
