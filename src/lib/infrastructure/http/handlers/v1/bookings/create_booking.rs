//! Create booking handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::{
        bookings::{BookingService, NewBooking},
        comms::EmailAddress,
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Recipient used when the request does not provide an email address
pub const DEFAULT_RECIPIENT: &str = "test@example.com";

/// Acknowledgement returned for every successful creation
pub const CREATED_STATUS: &str = "Booking created, confirmation email sent.";

/// Create booking request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingBody {
    /// Contact email address; defaults to `test@example.com` when omitted
    #[schema(example = "email@example.com")]
    email: Option<String>,
}

/// Create booking response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingResponse {
    /// Acknowledgement message
    #[schema(example = "Booking created, confirmation email sent.")]
    status: String,
}

/// Create a new booking
///
/// The confirmation email is dispatched fire-and-forget, so a 201 says nothing
/// about delivery.
#[utoipa::path(
    post,
    operation_id = "create_booking",
    tag = "Bookings",
    path = "/api/v1/bookings",
    request_body = CreateBookingBody,
    responses(
        (status = StatusCode::CREATED, description = "Booking created", body = CreateBookingResponse),
        (status = StatusCode::UNPROCESSABLE_ENTITY, description = "Unprocessable entity", body = ErrorResponse, example = json!({"error": "Please provide a valid email address"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error", body = ErrorResponse),
    )
)]
pub async fn handler<B: BookingService>(
    State(state): State<AppState<B>>,
    request: Result<Json<CreateBookingBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), ApiError> {
    let Json(request) = request?;

    let email = EmailAddress::new(request.email.as_deref().unwrap_or(DEFAULT_RECIPIENT))?;

    let booking = NewBooking::new(Uuid::now_v7(), email);

    state.bookings.create_booking(&booking).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            status: CREATED_STATUS.to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        domain::bookings::{errors::CreateBookingError, tests::MockBookingService},
        infrastructure::http::{
            errors::ErrorResponse,
            handlers::v1::bookings::create_booking::{
                CreateBookingBody, CreateBookingResponse, CREATED_STATUS, DEFAULT_RECIPIENT,
            },
            router,
            state::test_state,
        },
    };

    impl CreateBookingBody {
        fn new(email: Option<&str>) -> Self {
            Self {
                email: email.map(str::to_string),
            }
        }
    }

    #[tokio::test]
    async fn test_create_booking_success() -> TestResult {
        let mut bookings = MockBookingService::new();
        let booking_id = Uuid::now_v7();

        bookings
            .expect_create_booking()
            .times(1)
            .withf(|booking| booking.email().to_string() == "a@b.com")
            .returning(move |_| Ok(booking_id.clone()));

        let state = test_state(Some(bookings));

        let response = TestServer::new(router(state))?
            .post("/api/v1/bookings")
            .json(&CreateBookingBody::new(Some("a@b.com")))
            .await;

        let json = response.json::<CreateBookingResponse>();

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(json.status, CREATED_STATUS);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_defaults_missing_email() -> TestResult {
        let mut bookings = MockBookingService::new();
        let booking_id = Uuid::now_v7();

        bookings
            .expect_create_booking()
            .times(1)
            .withf(|booking| booking.email().to_string() == DEFAULT_RECIPIENT)
            .returning(move |_| Ok(booking_id.clone()));

        let state = test_state(Some(bookings));

        let response = TestServer::new(router(state))?
            .post("/api/v1/bookings")
            .json(&serde_json::json!({}))
            .await;

        let json = response.json::<CreateBookingResponse>();

        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(json.status, CREATED_STATUS);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_email_error() -> TestResult {
        let state = test_state(None);

        let response = TestServer::new(router(state))?
            .post("/api/v1/bookings")
            .json(&CreateBookingBody::new(Some("not an email")))
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.error, "Please provide a valid email address");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_booking_unknown_error() -> TestResult {
        let mut bookings = MockBookingService::new();

        bookings
            .expect_create_booking()
            .returning(|_| Err(CreateBookingError::UnknownError(anyhow!("Unknown error"))));

        let state = test_state(Some(bookings));

        let response = TestServer::new(router(state))?
            .post("/api/v1/bookings")
            .json(&CreateBookingBody::new(Some("a@b.com")))
            .await;

        assert_eq!(
            response.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        Ok(())
    }
}
