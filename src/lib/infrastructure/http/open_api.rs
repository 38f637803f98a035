//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Booking API"),
    paths(
        bookings::create_booking::handler,
        bookings::list_bookings::handler,
        bookings::get_booking_by_id::handler,
        bookings::update_booking::handler,
        bookings::delete_booking::handler,
        uptime::handler
    ),
    components(schemas(
        bookings::create_booking::CreateBookingBody,
        bookings::create_booking::CreateBookingResponse,
        bookings::list_bookings::ListBookingsResponse,
        bookings::list_bookings::BookingSummary,
        bookings::get_booking_by_id::GetBookingByIdResponse,
        bookings::update_booking::UpdateBookingBody,
        bookings::update_booking::UpdateBookingResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
