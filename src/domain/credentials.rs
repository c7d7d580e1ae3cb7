// src/domain/credentials.rs
//
// Login/Signup form checks
//
// These run before any call to the identity provider. They are client-side
// guardrails only; the provider applies its own policy independently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_SIGNUP_AGE: u32 = 18;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all the required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password should be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Age must be a whole number, got {0:?}.")]
    InvalidAge(String),

    #[error("You must be at least {min} years old to register.")]
    Underage { min: u32 },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if is_blank(&form.email) || form.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Checks a signup form in the order the user sees the messages:
/// missing fields, email, password length, then age.
///
/// Returns the parsed age on success.
pub fn validate_signup(form: &SignupForm) -> Result<u32, ValidationError> {
    if is_blank(&form.first_name)
        || is_blank(&form.last_name)
        || is_blank(&form.age)
        || is_blank(&form.email)
        || form.password.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    if !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    if form.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    let age: u32 = form
        .age
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAge(form.age.clone()))?;

    if age < MIN_SIGNUP_AGE {
        return Err(ValidationError::Underage {
            min: MIN_SIGNUP_AGE,
        });
    }

    Ok(age)
}
