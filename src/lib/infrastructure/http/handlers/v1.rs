use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    domain::bookings::BookingService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod bookings;
pub mod stoplight;
pub mod uptime;

pub fn router<B: BookingService>() -> Router<AppState<B>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route(
            "/bookings",
            get(bookings::list_bookings::handler).post(bookings::create_booking::handler),
        )
        .route(
            "/bookings/:id",
            get(bookings::get_booking_by_id::handler)
                .put(bookings::update_booking::handler)
                .delete(bookings::delete_booking::handler),
        )
}
