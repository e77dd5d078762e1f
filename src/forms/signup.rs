use serde::Deserialize;

use super::{FormErrors, REQUIRED};

pub const USERNAME_MAX: usize = 150;
pub const PASSWORD_MIN: usize = 8;

/// Username/password pair with confirmation
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: Option<String>,
    pub password1: Option<String>,
    pub password2: Option<String>,
}

/// Signup input that passed validation; the username may still be taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub username: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<ValidSignup, FormErrors> {
        let mut errors = FormErrors::new();

        let username = self.username.as_deref().map(str::trim).unwrap_or_default();
        if let Err(message) = check_username(username) {
            errors.add("username", message);
        }

        // Passwords are never trimmed
        let password1 = self.password1.as_deref().unwrap_or_default();
        let password2 = self.password2.as_deref().unwrap_or_default();
        if password1.is_empty() {
            errors.add("password1", REQUIRED);
        }
        if password2.is_empty() {
            errors.add("password2", REQUIRED);
        } else if password1 != password2 {
            errors.add("password2", "The two password fields didn't match.");
        } else {
            for message in password_problems(password2, username) {
                errors.add("password2", message);
            }
        }

        errors.into_result(|| ValidSignup {
            username: username.to_string(),
            password: password1.to_string(),
        })
    }
}

pub fn check_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err(REQUIRED.to_string());
    }

    let length = username.chars().count();
    if length > USERNAME_MAX {
        return Err(format!(
            "Ensure this value has at most {USERNAME_MAX} characters (it has {length})."
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
                .to_string(),
        );
    }

    Ok(())
}

fn password_problems(password: &str, username: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if password.chars().count() < PASSWORD_MIN {
        problems.push(format!(
            "This password is too short. It must contain at least {PASSWORD_MIN} characters."
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }
    if !username.is_empty() && password.to_lowercase() == username.to_lowercase() {
        problems.push("The password is too similar to the username.".to_string());
    }

    problems
}
