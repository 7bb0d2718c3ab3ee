//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Status mapping follows three tiers: missing records are 404, request-shape and
//! validation failures are 422, and anything else from the store is a logged 500.

pub mod config;
pub mod policy;

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, policy::PolicyError},
};

/// Kind of record a not-found error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Order,
    Dish,
    DiscountDetail,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Order => "Order",
            Self::Dish => "Dish",
            Self::DiscountDetail => "DiscountDetail",
        };
        f.write_str(name)
    }
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for
/// automatic conversion, while domain variants carry the message returned to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A record addressed by id does not exist.
    ///
    /// Results in 404 Not Found with a `"<Kind> with id <id> not found"` message.
    #[error("{kind} with id {id} not found")]
    RecordNotFound {
        /// Kind of record that was looked up
        kind: EntityKind,
        /// Identifier as presented to the client
        id: String,
    },

    /// Discount rejected by the pricing policy.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error(transparent)]
    PolicyErr(#[from] PolicyError),

    /// Write collided with an existing record.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("{0}")]
    Conflict(String),

    /// Request is well-formed HTTP but cannot be processed.
    ///
    /// Results in 422 Unprocessable Entity with the provided error message.
    #[error("{0}")]
    UnprocessableEntity(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a not-found error for the given record kind and identifier.
    pub fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        Self::RecordNotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Returns true when the error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::UnprocessableEntity(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Internal errors are logged with full details but return generic messages to
/// avoid information leakage.
///
/// # Returns
/// - 404 Not Found - For `RecordNotFound`
/// - 422 Unprocessable Entity - For `PolicyErr`, `Conflict` and `UnprocessableEntity`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            err @ Self::RecordNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, err.to_string())
            }
            err @ (Self::PolicyErr(_) | Self::Conflict(_) | Self::UnprocessableEntity(_)) => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
