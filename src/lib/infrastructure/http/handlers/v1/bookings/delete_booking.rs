//! Delete booking handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    domain::bookings::BookingService,
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Delete a booking
#[utoipa::path(
    delete,
    operation_id = "delete_booking",
    tag = "Bookings",
    path = "/api/v1/bookings/{id}",
    params(
        ("id" = Uuid, Path, description = "The UUID of the booking", example = "550e8400-e29b-41d4-a716-446655440000"),
    ),
    responses(
        (status = StatusCode::NO_CONTENT, description = "Booking deleted"),
        (status = StatusCode::NOT_FOUND, description = "Booking not found", body = ErrorResponse, example = json!({ "error": "Booking with id \"550e8400-e29b-41d4-a716-446655440000\" not found" })),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<B: BookingService>(
    State(state): State<AppState<B>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.bookings.delete_booking(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        domain::bookings::{errors::DeleteBookingError, tests::MockBookingService},
        infrastructure::http::{errors::ErrorResponse, router, state::test_state},
    };

    #[tokio::test]
    async fn test_delete_booking_success() -> TestResult {
        let booking_id = Uuid::now_v7();
        let mut bookings = MockBookingService::new();

        bookings
            .expect_delete_booking()
            .times(1)
            .withf(move |id| *id == booking_id)
            .returning(|_| Ok(()));

        let state = test_state(Some(bookings));

        let response = TestServer::new(router(state))?
            .delete(&format!("/api/v1/bookings/{booking_id}"))
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_booking_not_found() -> TestResult {
        let booking_id = Uuid::now_v7();
        let mut bookings = MockBookingService::new();

        bookings
            .expect_delete_booking()
            .returning(move |id| Err(DeleteBookingError::BookingNotFound(*id)));

        let state = test_state(Some(bookings));

        let response = TestServer::new(router(state))?
            .delete(&format!("/api/v1/bookings/{booking_id}"))
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            json.error,
            format!("Booking with id \"{booking_id}\" not found")
        );

        Ok(())
    }
}
