//! Domain models and services

pub mod bookings;
pub mod comms;
