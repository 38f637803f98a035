//! Email job dispatch

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::mock;

use crate::domain::comms::EmailAddress;

/// A request to send one email, executed outside the request/response cycle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJob {
    /// The recipient of the email
    pub to: EmailAddress,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub body: String,
}

/// Errors that can occur when enqueueing a job
#[derive(Debug, Error)]
pub enum EnqueueError {
    /// The queue is no longer accepting jobs
    #[error("The job queue is closed")]
    QueueClosed,
}

/// Fire-and-forget job queue.
///
/// `enqueue` hands the job to an external worker and returns immediately.
/// Callers get no completion signal and no delivery guarantee; a failed or
/// dropped job is only visible in the worker's logs.
pub trait JobQueue: Clone + Send + Sync + 'static {
    /// Submit a job for asynchronous execution without waiting on its outcome
    fn enqueue(&self, job: EmailJob) -> Result<(), EnqueueError>;
}

#[cfg(test)]
mock! {
    pub JobQueue {}

    impl Clone for JobQueue {
        fn clone(&self) -> Self;
    }

    impl JobQueue for JobQueue {
        fn enqueue(&self, job: EmailJob) -> Result<(), EnqueueError>;
    }
}
