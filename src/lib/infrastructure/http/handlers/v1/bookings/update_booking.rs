//! Update booking handler

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::{
        bookings::{Booking, BookingService},
        comms::EmailAddress,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Update booking request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingBody {
    /// The new contact email address
    #[schema(example = "email@example.com")]
    email: String,
}

/// Update booking response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingResponse {
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

impl From<Booking> for UpdateBookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            email: booking.email.to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Update the contact email address of a booking
#[utoipa::path(
    put,
    operation_id = "update_booking",
    tag = "Bookings",
    path = "/api/v1/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "The UUID of the booking", example = "550e8400-e29b-41d4-a716-446655440000"),
    ),
    request_body = UpdateBookingBody,
    responses(
        (status = StatusCode::OK, description = "Booking updated", body = UpdateBookingResponse),
        (status = StatusCode::NOT_FOUND, description = "Booking not found", body = ErrorResponse, example = json!({ "error": "Booking with id \"550e8400-e29b-41d4-a716-446655440000\" not found" })),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Unprocessable entity", body = ErrorResponse, example = json!({"error": "Please provide a valid email address"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<B: BookingService>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
    request: Result<Json<UpdateBookingBody>, JsonRejection>,
) -> Result<Json<UpdateBookingResponse>, ApiError> {
    let Json(request) = request?;

    let email = EmailAddress::new(&request.email)?;

    let booking = state.bookings.update_booking(&id, &email).await?.into();

    Ok(Json(booking))
}
