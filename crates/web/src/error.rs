use std::borrow::Cow;
use std::fmt;

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::error::StorageError;
use validator::{ValidationError, ValidationErrors};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl WebError {
    /// A validation failure on a single field, reported like the derive rules.
    pub fn invalid_field(
        field: &'static str,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Owned(message.into()));

        let mut errors = ValidationErrors::new();
        errors.add(field, error);

        Self::Validation(errors)
    }

    fn field_messages(errors: &ValidationErrors) -> Vec<String> {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                })
            })
            .collect();
        messages.sort();
        messages
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::Duplicate(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Messages safe to show an end user. Internal storage failures are
    /// reported generically.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Storage(StorageError::NotFound) => vec!["Athlete not found".to_string()],
            Self::Storage(StorageError::Duplicate(msg)) => vec![msg.clone()],
            Self::Storage(_) => vec!["An internal error occurred".to_string()],
            Self::Validation(errors) => Self::field_messages(errors),
            Self::BadRequest(msg) => vec![msg.clone()],
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl std::error::Error for WebError {}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Athlete not found"
                })
            }
            Self::Storage(StorageError::Duplicate(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                json!({
                    "error": "Validation failed",
                    "details": Self::field_messages(errors)
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for WebError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for WebError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct_per_kind() {
        let cases = [
            (WebError::Storage(StorageError::NotFound), StatusCode::NOT_FOUND),
            (
                WebError::Storage(StorageError::Duplicate("taken".into())),
                StatusCode::CONFLICT,
            ),
            (
                WebError::Storage(StorageError::InvalidRecord("bad".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                WebError::invalid_field("gender", "invalid_gender", "nope"),
                StatusCode::BAD_REQUEST,
            ),
            (WebError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_invalid_field_message() {
        let WebError::Validation(errors) =
            WebError::invalid_field("lift", "invalid_lift", "unknown lift")
        else {
            panic!("expected a validation error");
        };

        assert_eq!(WebError::field_messages(&errors), vec!["lift: unknown lift"]);
    }

    #[test]
    fn test_messages_hide_storage_internals() {
        let error = WebError::Storage(StorageError::InvalidRecord("bad gender 'x'".into()));
        assert_eq!(error.messages(), vec!["An internal error occurred"]);

        let error = WebError::Storage(StorageError::Duplicate("Jane Doe is taken".into()));
        assert_eq!(error.messages(), vec!["Jane Doe is taken"]);
    }
}
