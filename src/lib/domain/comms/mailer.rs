//! Email delivery module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::comms::{errors::EmailError, EmailAddress};

/// Email delivery service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `to` - The [`EmailAddress`] to send the email to.
    /// * `subject` - The subject of the email.
    /// * `body` - The plain text body of the email.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_email(
        &self,
        to: &EmailAddress,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, to: &EmailAddress, subject: &str, body: &str) -> Result<(), EmailError>;
    }
}
