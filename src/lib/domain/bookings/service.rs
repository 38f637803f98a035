//! Booking service module

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    bookings::{
        emails,
        errors::{
            CreateBookingError, DeleteBookingError, GetBookingByIdError, ListBookingsError,
            UpdateBookingError,
        },
        Booking, BookingRepository, NewBooking,
    },
    comms::{EmailAddress, JobQueue},
};

/// Booking service
#[async_trait]
pub trait BookingService: Clone + Send + Sync + 'static {
    /// Creates a new booking and dispatches its confirmation email.
    ///
    /// The confirmation is fire-and-forget: it is handed to the job queue and
    /// the result of this call says nothing about whether the email was, or
    /// will be, delivered.
    ///
    /// # Arguments
    /// * `booking` - A reference to a [`NewBooking`] containing the booking details.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the booking's UUID if the booking
    /// is successfully created, or an [`Err`] containing a [`CreateBookingError`]
    /// if the booking cannot be created.
    async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError>;

    /// Lists all bookings.
    async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError>;

    /// Retrieves a booking by its ID.
    async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError>;

    /// Updates the contact email address of a booking.
    async fn update_booking(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<Booking, UpdateBookingError>;

    /// Deletes a booking.
    async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError>;
}

#[cfg(test)]
mock! {
    pub BookingService {}

    impl Clone for BookingService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl BookingService for BookingService {
        async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError>;
        async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError>;
        async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError>;
        async fn update_booking(&self, id: &Uuid, email: &EmailAddress) -> Result<Booking, UpdateBookingError>;
        async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError>;
    }
}

/// Booking service implementation
#[derive(Debug, Clone)]
pub struct BookingServiceImpl<R, Q>
where
    R: BookingRepository,
    Q: JobQueue,
{
    repo: Arc<R>,
    jobs: Arc<Q>,
}

impl<R, Q> BookingServiceImpl<R, Q>
where
    R: BookingRepository,
    Q: JobQueue,
{
    /// Create a new booking service
    pub fn new(repo: Arc<R>, jobs: Arc<Q>) -> Self {
        Self { repo, jobs }
    }
}

#[async_trait]
impl<R, Q> BookingService for BookingServiceImpl<R, Q>
where
    R: BookingRepository,
    Q: JobQueue,
{
    async fn create_booking(&self, booking: &NewBooking) -> Result<Uuid, CreateBookingError> {
        let id = self.repo.create_booking(booking).await?;

        let job = emails::booking_confirmation(booking.email().clone());

        // The booking stands whether or not the confirmation can be queued.
        if let Err(err) = self.jobs.enqueue(job) {
            warn!("could not enqueue confirmation email for booking {id}: {err}");
        }

        Ok(id)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ListBookingsError> {
        self.repo.list_bookings().await
    }

    async fn get_booking_by_id(&self, id: &Uuid) -> Result<Booking, GetBookingByIdError> {
        self.repo.get_booking_by_id(id).await
    }

    async fn update_booking(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<Booking, UpdateBookingError> {
        self.repo.update_booking(id, email).await
    }

    async fn delete_booking(&self, id: &Uuid) -> Result<(), DeleteBookingError> {
        self.repo.delete_booking(id).await
    }
}
