//! In-process job queue for outbound email.
//!
//! The HTTP side only ever sees the [`JobQueue`] trait: jobs go into an
//! unbounded channel and are delivered by an [`EmailWorker`] task spawned at
//! startup. Delivery failures are logged, never reported back to the caller.

use std::fmt;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::domain::comms::{EmailJob, EnqueueError, JobQueue, Mailer};

/// Job queue backed by an in-process channel
#[derive(Clone, Debug)]
pub struct MailerJobQueue {
    sender: UnboundedSender<EmailJob>,
}

impl MailerJobQueue {
    /// Create a new queue, returning the receiving end for an [`EmailWorker`]
    pub fn new() -> (Self, UnboundedReceiver<EmailJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

impl JobQueue for MailerJobQueue {
    fn enqueue(&self, job: EmailJob) -> Result<(), EnqueueError> {
        self.sender.send(job).map_err(|_| EnqueueError::QueueClosed)
    }
}

/// Worker that drains the job queue and delivers each email through a [`Mailer`]
pub struct EmailWorker<M: Mailer> {
    mailer: M,
    jobs: UnboundedReceiver<EmailJob>,
}

impl<M: Mailer> EmailWorker<M> {
    /// Create a new worker for the given mailer and queue
    pub fn new(mailer: M, jobs: UnboundedReceiver<EmailJob>) -> Self {
        Self { mailer, jobs }
    }

    /// Run the worker until every sender has been dropped
    pub async fn run(mut self) {
        while let Some(job) = self.jobs.recv().await {
            debug!("sending \"{}\" to {}", job.subject, job.to);

            if let Err(err) = self.mailer.send_email(&job.to, &job.subject, &job.body).await {
                warn!("failed to send email to {}: {}", job.to, err);
            }
        }
    }
}

impl<M: Mailer> fmt::Debug for EmailWorker<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailWorker")
            .field("mailer", &"Mailer")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::{
        bookings::emails,
        comms::{tests::MockMailer, EmailAddress},
    };

    use super::*;

    #[tokio::test]
    async fn test_worker_delivers_enqueued_jobs() -> TestResult {
        let to = EmailAddress::new("email@example.com")?;
        let expected_to = to.clone();

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(1)
            .withf(move |to, subject, body| {
                *to == expected_to
                    && subject == emails::CONFIRMATION_SUBJECT
                    && body == emails::CONFIRMATION_BODY
            })
            .returning(|_, _, _| Ok(()));

        let (queue, jobs) = MailerJobQueue::new();

        queue.enqueue(emails::booking_confirmation(to))?;

        // Dropping the queue closes the channel, so the worker drains and stops.
        drop(queue);

        EmailWorker::new(mailer, jobs).run().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_worker_keeps_running_after_a_failed_send() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(2)
            .returning(|_, _, _| Err(crate::domain::comms::errors::EmailError::SendError));

        let (queue, jobs) = MailerJobQueue::new();

        queue.enqueue(emails::booking_confirmation(EmailAddress::new("a@b.com")?))?;
        queue.enqueue(emails::booking_confirmation(EmailAddress::new("c@d.com")?))?;

        drop(queue);

        EmailWorker::new(mailer, jobs).run().await;

        Ok(())
    }

    #[test]
    fn test_enqueue_fails_when_worker_side_is_dropped() -> TestResult {
        let (queue, jobs) = MailerJobQueue::new();

        drop(jobs);

        let result = queue.enqueue(emails::booking_confirmation(EmailAddress::new("a@b.com")?));

        assert!(matches!(result, Err(EnqueueError::QueueClosed)));

        Ok(())
    }
}
