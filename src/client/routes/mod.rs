pub mod apply;
pub mod create_job;
pub mod dashboard;
pub mod jobs;
pub mod login;
pub mod not_found;
pub mod register;

pub use apply::Apply;
pub use create_job::CreateJob;
pub use dashboard::Dashboard;
pub use jobs::Jobs;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
