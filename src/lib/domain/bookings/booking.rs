//! Booking model

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::comms::EmailAddress;

/// Booking model
///
/// Deliberately minimal: the contact address is the only attribute this
/// service needs to act on a booking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    /// Booking UUID
    pub id: Uuid,

    /// Contact email address for the booking
    pub email: EmailAddress,

    /// Booking created at date in UTC
    pub created_at: DateTime<Utc>,

    /// Booking last updated at date in UTC
    pub updated_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBooking {
    /// New booking's ID
    id: Uuid,

    /// New booking's contact email address
    email: EmailAddress,
}

impl NewBooking {
    /// Create a new booking request
    pub fn new(id: Uuid, email: EmailAddress) -> Self {
        Self { id, email }
    }

    /// Get the new booking's ID
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Get the new booking's contact email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
