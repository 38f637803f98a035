//! Get booking by ID handler

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::bookings::{Booking, BookingService},
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Get booking by ID response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetBookingByIdResponse {
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

impl From<Booking> for GetBookingByIdResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            email: booking.email.to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Get a booking by its ID
#[utoipa::path(
    get,
    operation_id = "get_booking_by_id",
    tag = "Bookings",
    path = "/api/v1/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "The UUID of the booking", example = "550e8400-e29b-41d4-a716-446655440000"),
    ),
    responses(
        (status = StatusCode::OK, description = "Booking found", body = GetBookingByIdResponse),
        (status = StatusCode::NOT_FOUND, description = "Booking not found", body = ErrorResponse, example = json!({ "error": "Booking with id \"550e8400-e29b-41d4-a716-446655440000\" not found" })),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<B: BookingService>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBookingByIdResponse>, ApiError> {
    let booking = state.bookings.get_booking_by_id(&id).await?.into();

    Ok(Json(booking))
}
