//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::bookings::BookingService;

/// Global application state
#[derive(Clone)]
pub struct AppState<B: BookingService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Booking service
    pub bookings: Arc<B>,
}

impl<B> AppState<B>
where
    B: BookingService,
{
    /// Create a new application state
    pub fn new(bookings: B) -> Self {
        Self {
            start_time: Utc::now(),
            bookings: Arc::new(bookings),
        }
    }
}

impl<B> fmt::Debug for AppState<B>
where
    B: BookingService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("bookings", &"BookingService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::bookings::tests::MockBookingService;

#[cfg(test)]
pub fn test_state(bookings: Option<MockBookingService>) -> AppState<MockBookingService> {
    let bookings = bookings
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockBookingService::new()));

    AppState {
        start_time: Utc::now(),
        bookings,
    }
}
