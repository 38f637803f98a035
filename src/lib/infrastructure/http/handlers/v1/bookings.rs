//! Booking handlers

pub mod create_booking;
pub mod delete_booking;
pub mod get_booking_by_id;
pub mod list_bookings;
pub mod update_booking;
