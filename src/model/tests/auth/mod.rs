mod registration;
mod role;
