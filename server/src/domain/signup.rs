//! Signup Form
//!
//! Field rules for account registration. Uniqueness against existing
//! accounts is the store's business; this module only checks shape.

use serde::Deserialize;

pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub const MSG_USERNAME_LENGTH: &str =
    "Username must be between 4 and 25 characters long.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";
pub const MSG_PASSWORDS_MATCH: &str = "Passwords must match.";
pub const MSG_ACCEPT_TOS: &str = "You must accept the terms of service.";

/// Body of `POST /signup`
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
    #[serde(default)]
    pub accept_tos: bool,
}

impl SignupForm {
    /// Check field rules, collecting one message per violated field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut messages = Vec::new();

        if !looks_like_email(&self.email) {
            messages.push(MSG_INVALID_EMAIL.to_string());
        }
        if !(4..=25).contains(&self.username.chars().count()) {
            messages.push(MSG_USERNAME_LENGTH.to_string());
        }
        if self.password.is_empty() {
            messages.push(MSG_PASSWORD_REQUIRED.to_string());
        } else if self.password != self.confirm {
            messages.push(MSG_PASSWORDS_MATCH.to_string());
        }
        if !self.accept_tos {
            messages.push(MSG_ACCEPT_TOS.to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    if !(6..=35).contains(&email.chars().count()) || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, username: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            confirm: confirm.to_string(),
            accept_tos: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(form("adam@adammail.com", "adamadam", "adampassword", "adampassword")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_invalid_email() {
        let errors = form("not_an_email", "asdfasdf", "password", "password")
            .validate()
            .unwrap_err();
        assert!(errors.iter().any(|m| m == MSG_INVALID_EMAIL));
    }

    #[test]
    fn test_rejects_short_username() {
        let errors = form("asdf@asdf.com", "abc", "password", "password")
            .validate()
            .unwrap_err();
        assert!(errors.iter().any(|m| m == MSG_USERNAME_LENGTH));
    }

    #[test]
    fn test_rejects_mismatched_passwords() {
        let errors = form("asdf@asdf.com", "asdfasdf", "password", "PASSWORD")
            .validate()
            .unwrap_err();
        assert!(errors.iter().any(|m| m == MSG_PASSWORDS_MATCH));
    }

    #[test]
    fn test_rejects_missing_tos() {
        let mut f = form("asdf@asdf.com", "asdfasdf", "password", "password");
        f.accept_tos = false;
        let errors = f.validate().unwrap_err();
        assert!(errors.iter().any(|m| m == MSG_ACCEPT_TOS));
    }

    #[test]
    fn test_collects_multiple_violations() {
        let errors = form("x@y", "abc", "", "")
            .validate()
            .unwrap_err();
        assert!(errors.len() >= 3);
    }
}
