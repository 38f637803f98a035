//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    bookings::errors::{
        CreateBookingError, DeleteBookingError, GetBookingByIdError, ListBookingsError,
        UpdateBookingError,
    },
    comms::EmailAddressError,
};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Internal server error")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new not found error
    pub fn new_404(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_string(),
        }
    }

    /// Create a new unprocessable entity error
    pub fn new_422(message: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.to_string(),
        }
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(err: EmailAddressError) -> Self {
        match err {
            EmailAddressError::EmptyEmailAddress => {
                ApiError::new_422("Please provide an email address")
            }
            EmailAddressError::InvalidEmailAddress => {
                ApiError::new_422("Please provide a valid email address")
            }
        }
    }
}

impl From<CreateBookingError> for ApiError {
    fn from(err: CreateBookingError) -> Self {
        match err {
            CreateBookingError::UnknownError(err) => unknown_error(Some(err.to_string())),
        }
    }
}

impl From<ListBookingsError> for ApiError {
    fn from(err: ListBookingsError) -> Self {
        match err {
            ListBookingsError::UnknownError(err) => unknown_error(Some(err.to_string())),
        }
    }
}

impl From<GetBookingByIdError> for ApiError {
    fn from(err: GetBookingByIdError) -> Self {
        match err {
            GetBookingByIdError::BookingNotFound(id) => {
                ApiError::new_404(&format!("Booking with id \"{id}\" not found"))
            }
            GetBookingByIdError::UnknownError(err) => unknown_error(Some(err.to_string())),
        }
    }
}

impl From<UpdateBookingError> for ApiError {
    fn from(err: UpdateBookingError) -> Self {
        match err {
            UpdateBookingError::BookingNotFound(id) => {
                ApiError::new_404(&format!("Booking with id \"{id}\" not found"))
            }
            UpdateBookingError::UnknownError(err) => unknown_error(Some(err.to_string())),
        }
    }
}

impl From<DeleteBookingError> for ApiError {
    fn from(err: DeleteBookingError) -> Self {
        match err {
            DeleteBookingError::BookingNotFound(id) => {
                ApiError::new_404(&format!("Booking with id \"{id}\" not found"))
            }
            DeleteBookingError::UnknownError(err) => unknown_error(Some(err.to_string())),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

fn unknown_error(message: Option<String>) -> ApiError {
    if let Some(message) = message {
        ApiError::new_500(&message)
    } else {
        ApiError::new_500("An unknown error occurred, please try again")
    }
}
