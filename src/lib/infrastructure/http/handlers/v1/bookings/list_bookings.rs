//! List bookings handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::bookings::{Booking, BookingService},
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// A single booking in the list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingSummary {
    /// The booking's UUID
    id: String,

    /// The booking's contact email address
    #[schema(example = "email@example.com")]
    email: String,

    /// When the booking was created
    created_at: DateTime<Utc>,

    /// When the booking was last updated
    updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingSummary {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            email: booking.email.to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// List bookings response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListBookingsResponse {
    /// The bookings, oldest first
    bookings: Vec<BookingSummary>,
}

/// List all bookings
#[utoipa::path(
    get,
    operation_id = "list_bookings",
    tag = "Bookings",
    path = "/api/v1/bookings",
    responses(
        (status = StatusCode::OK, description = "Bookings listed", body = ListBookingsResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<B: BookingService>(
    State(state): State<AppState<B>>,
) -> Result<Json<ListBookingsResponse>, ApiError> {
    let bookings = state
        .bookings
        .list_bookings()
        .await?
        .into_iter()
        .map(BookingSummary::from)
        .collect();

    Ok(Json(ListBookingsResponse { bookings }))
}
