//! Booking repository module

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    bookings::{
        errors::{
            CreateBookingError, DeleteBookingError, GetBookingByIdError, ListBookingsError,
            UpdateBookingError,
        },
        Booking, NewBooking,
    },
    comms::EmailAddress,
};

/// Booking repository
#[async_trait]
pub trait BookingRepository: Clone + Send + Sync + 'static {
    /// Create a new booking
    async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError>;

    /// List all bookings
    async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError>;

    /// Get a booking by its ID
    async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError>;

    /// Update the contact email address of a booking
    async fn update_booking(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<Booking, UpdateBookingError>;

    /// Delete a booking
    async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError>;
}

#[cfg(test)]
mock! {
    pub BookingRepository {}

    impl Clone for BookingRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl BookingRepository for BookingRepository {
        async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError>;
        async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError>;
        async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError>;
        async fn update_booking(&self, id: &Uuid, email: &EmailAddress) -> Result<Booking, UpdateBookingError>;
        async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError>;
    }
}
