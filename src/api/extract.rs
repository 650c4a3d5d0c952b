//! Request extractors

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::domain::DomainError;
use crate::error::AppError;

/// JSON body that has been deserialized and validated
///
/// Malformed JSON is an invalid request; a well-formed body that breaks a
/// field rule is a validation error. Both become 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::InvalidRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| DomainError::Validation(describe(&errors)))?;

        Ok(Self(value))
    }
}

/// Flatten field errors into `field: message, ...`
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::CreateUserCommand;

    #[test]
    fn test_describe_lists_every_field() {
        let cmd = CreateUserCommand::new("nope", "123", "", "B");
        let errors = cmd.validate().unwrap_err();

        let text = describe(&errors);
        assert!(text.contains("email: Must be a valid email"));
        assert!(text.contains("password: Password must be at least 6 characters"));
        assert!(text.contains("first_name: First name is required"));
        assert!(!text.contains("last_name"));
    }
}
