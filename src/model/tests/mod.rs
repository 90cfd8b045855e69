mod auth;
mod job;
mod validate;
