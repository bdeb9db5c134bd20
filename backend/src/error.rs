//! Error handling for the Medical Store Inventory backend
//!
//! Handlers catch these at the boundary and turn them into a redirect plus a
//! flash message. The `IntoResponse` impl covers the few paths that cannot
//! redirect, such as a template that fails to render.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared::FieldError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {field} {message}")]
    Validation { field: String, message: String },

    // Referential-integrity prechecks
    #[error("Supplier ID {0} does not exist")]
    UnknownSupplier(i32),

    #[error("Medication ID {0} does not exist")]
    UnknownMedication(i32),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Rendering errors
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        FieldError::from(errors).into()
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::UnknownSupplier(_) => "UNKNOWN_SUPPLIER",
            AppError::UnknownMedication(_) => "UNKNOWN_MEDICATION",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the user on the next rendered page
    pub fn flash_message(&self) -> String {
        match self {
            AppError::Validation { field, message } => format!("Error: {} {}", field, message),
            AppError::UnknownSupplier(id) => format!("Error: Supplier ID {} does not exist.", id),
            AppError::UnknownMedication(id) => {
                format!("Error: Medication ID {} does not exist.", id)
            }
            AppError::DatabaseError(e) => format!("Error: '{}'", e),
            AppError::Template(_) | AppError::InternalError(_) => {
                "Error: an internal error occurred".to_string()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::UnknownSupplier(_) | AppError::UnknownMedication(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::DatabaseError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Template(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    code: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!(code = self.code(), "Error: {:?}", self);

        let page = ErrorPage {
            code: self.code(),
            message: self.flash_message(),
        };
        let body = page.render().unwrap_or_else(|e| {
            tracing::error!("Template render error: {}", e);
            "Internal Server Error".to_string()
        });

        (self.status(), Html(body)).into_response()
    }
}

/// Result type alias for services and handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck_messages() {
        assert_eq!(
            AppError::UnknownSupplier(7).flash_message(),
            "Error: Supplier ID 7 does not exist."
        );
        assert_eq!(
            AppError::UnknownMedication(3).flash_message(),
            "Error: Medication ID 3 does not exist."
        );
    }

    #[test]
    fn test_field_error_conversion() {
        let err: AppError = FieldError::new("quantity", "is required").into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.flash_message(), "Error: quantity is required");
    }

    #[test]
    fn test_validator_error_names_field_once() {
        use validator::Validate;

        let input = shared::NewMedication {
            med_name: String::new(),
            category: String::new(),
            quantity: 1,
            expiry_date: None,
        };
        let err = AppError::from(input.validate().unwrap_err());
        assert_eq!(err.flash_message(), "Error: med_name must be 1-255 characters");
    }

    #[test]
    fn test_database_error_message() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(err.flash_message().starts_with("Error: '"));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::UnknownSupplier(1).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
