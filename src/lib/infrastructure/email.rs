//! Email adapters

pub mod smtp;
