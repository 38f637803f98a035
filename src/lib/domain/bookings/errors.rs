//! Error types for booking operations

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when creating a booking
#[derive(Debug, Error)]
pub enum CreateBookingError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when listing bookings
#[derive(Debug, Error)]
pub enum ListBookingsError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when getting a booking
#[derive(Debug, Error)]
pub enum GetBookingByIdError {
    /// Booking not found
    #[error("Booking with id \"{0}\" not found")]
    BookingNotFound(Uuid),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when updating a booking
#[derive(Debug, Error)]
pub enum UpdateBookingError {
    /// Booking not found
    #[error("Booking with id \"{0}\" not found")]
    BookingNotFound(Uuid),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

/// Errors that can occur when deleting a booking
#[derive(Debug, Error)]
pub enum DeleteBookingError {
    /// Booking not found
    #[error("Booking with id \"{0}\" not found")]
    BookingNotFound(Uuid),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
