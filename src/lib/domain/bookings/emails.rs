//! Booking confirmation email

use crate::domain::comms::{EmailAddress, EmailJob};

/// Subject line of the booking confirmation email
pub const CONFIRMATION_SUBJECT: &str = "Booking Confirmation";

/// Body of the booking confirmation email
pub const CONFIRMATION_BODY: &str = "Your booking was successful!";

/// Build the confirmation email job for a freshly created booking
pub fn booking_confirmation(to: EmailAddress) -> EmailJob {
    EmailJob {
        to,
        subject: CONFIRMATION_SUBJECT.to_string(),
        body: CONFIRMATION_BODY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::comms::EmailAddress;

    use super::*;

    #[test]
    fn test_booking_confirmation_has_fixed_subject_and_body() -> TestResult {
        let to = EmailAddress::new("email@example.com")?;

        let job = booking_confirmation(to.clone());

        assert_eq!(job.to, to);
        assert_eq!(job.subject, "Booking Confirmation");
        assert_eq!(job.body, "Your booking was successful!");

        Ok(())
    }
}
