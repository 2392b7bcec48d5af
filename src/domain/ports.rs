use super::submission::{PaymentSubmission, SubmissionId};
use crate::error::Result;
use async_trait::async_trait;

/// Ordered store of submissions awaiting review.
#[async_trait]
pub trait QueueStore: Send + Sync {
    async fn push(&self, submission: PaymentSubmission) -> Result<()>;
    async fn get(&self, id: &SubmissionId) -> Result<Option<PaymentSubmission>>;
    async fn remove(&self, id: &SubmissionId) -> Result<Option<PaymentSubmission>>;
    async fn all(&self) -> Result<Vec<PaymentSubmission>>;
}

/// Append-only archive of resolved (approved or rejected) submissions.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    async fn store(&self, submission: PaymentSubmission) -> Result<()>;
    async fn all(&self) -> Result<Vec<PaymentSubmission>>;
}

pub type QueueStoreBox = Box<dyn QueueStore>;
pub type ArchiveStoreBox = Box<dyn ArchiveStore>;
