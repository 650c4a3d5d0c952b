//! Command definitions
//!
//! Commands represent intentions to change the system state. Their shape
//! constraints are checked with `validator` at the transport boundary, before
//! a command is ever dispatched.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::dispatcher::Request;
use crate::domain::{UserId, UserView};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

// =========================================================================
// CreateUserCommand
// =========================================================================

/// Command to create a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserCommand {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

impl CreateUserCommand {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Request for CreateUserCommand {
    type Response = UserView;
}

// =========================================================================
// UpdateUserCommand
// =========================================================================

/// Command to update an existing user
///
/// Email and names are applied as given; the password is only replaced when
/// a non-empty one is supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserCommand {
    pub id: UserId,
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_new_password"))]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UpdateUserCommand {
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// The replacement password, if one was actually supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

impl Request for UpdateUserCommand {
    type Response = UserView;
}

/// An empty password means "keep the current one"
fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() || password.chars().count() >= MIN_PASSWORD_LEN {
        return Ok(());
    }
    let mut err = ValidationError::new("length");
    err.message = Some("Password must be at least 6 characters".into());
    Err(err)
}

// =========================================================================
// DeleteUserCommand
// =========================================================================

/// Command to delete a user
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteUserCommand {
    pub id: UserId,
}

impl DeleteUserCommand {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

impl Request for DeleteUserCommand {
    type Response = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_command_validation() {
        let cmd = CreateUserCommand::new("a@x.com", "secret1", "A", "B");
        assert!(cmd.validate().is_ok());

        let bad_email = CreateUserCommand::new("not-an-email", "secret1", "A", "B");
        assert!(bad_email.validate().is_err());

        let short_password = CreateUserCommand::new("a@x.com", "12345", "A", "B");
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let missing_name = CreateUserCommand::new("a@x.com", "secret1", "", "B");
        let errors = missing_name.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_create_user_command_reads_camel_case() {
        let cmd: CreateUserCommand = serde_json::from_str(
            r#"{"email":"a@x.com","password":"secret1","firstName":"A","lastName":"B"}"#,
        )
        .unwrap();

        assert_eq!(cmd.first_name, "A");
        assert_eq!(cmd.last_name, "B");
    }

    #[test]
    fn test_update_command_password_is_optional() {
        let cmd = UpdateUserCommand::new(1, "a@x.com", "A", "B");
        assert!(cmd.validate().is_ok());
        assert!(cmd.new_password().is_none());

        let empty = cmd.clone().with_password("");
        assert!(empty.validate().is_ok());
        assert!(empty.new_password().is_none());

        let short = cmd.clone().with_password("123");
        assert!(short.validate().is_err());

        let good = cmd.with_password("longenough");
        assert!(good.validate().is_ok());
        assert_eq!(good.new_password(), Some("longenough"));
    }

    #[test]
    fn test_update_command_without_password_field() {
        let cmd: UpdateUserCommand =
            serde_json::from_str(r#"{"id":3,"email":"c@x.com","firstName":"C","lastName":"D"}"#)
                .unwrap();

        assert_eq!(cmd.id, 3);
        assert!(cmd.password.is_none());
    }
}
