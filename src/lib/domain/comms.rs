//! Outbound communication: email addresses, email delivery and job dispatch.

mod email_address;
mod jobs;
mod mailer;

pub mod errors;

pub use email_address::{EmailAddress, EmailAddressError};
pub use jobs::{EmailJob, EnqueueError, JobQueue};
pub use mailer::Mailer;
