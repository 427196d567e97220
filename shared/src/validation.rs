//! Input validation functions
//!
//! Validation utilities for user-supplied fields, used by the backend
//! service layer before anything touches storage.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a contact name or surname
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate a phone number: digits with optional separators and + prefix
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.len() > 32 {
        return Err("Phone number too long".to_string());
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(7..=15).contains(&digits) {
        return Err("Phone number must contain 7 to 15 digits".to_string());
    }
    let phone_regex = regex_lite::Regex::new(r"^\+?[0-9 ()\-.]+$").unwrap();
    if !phone_regex.is_match(phone) {
        return Err("Invalid phone number".to_string());
    }
    Ok(())
}
