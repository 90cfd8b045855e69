mod email_is_valid;
mod password_strength;
