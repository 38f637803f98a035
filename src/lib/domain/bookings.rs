//! This module contains the booking model and its related functions.

mod booking;
mod repository;
mod service;

pub mod emails;
pub mod errors;

pub use booking::{Booking, NewBooking};
pub use repository::BookingRepository;
pub use service::{BookingService, BookingServiceImpl};

#[cfg(test)]
pub mod tests {
    pub use super::repository::MockBookingRepository;
    pub use super::service::MockBookingService;
}
