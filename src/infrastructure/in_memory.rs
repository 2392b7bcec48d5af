use crate::domain::ports::{ArchiveStore, QueueStore};
use crate::domain::submission::{PaymentSubmission, SubmissionId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory review queue.
///
/// Uses `Arc<RwLock<Vec<PaymentSubmission>>>` to allow shared concurrent
/// access while keeping submissions in arrival order. Removing an item
/// preserves the relative order of the rest.
#[derive(Default, Clone)]
pub struct InMemoryQueue {
    submissions: Arc<RwLock<Vec<PaymentSubmission>>>,
}

impl InMemoryQueue {
    /// Creates a new, empty in-memory queue.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QueueStore for InMemoryQueue {
    async fn push(&self, submission: PaymentSubmission) -> Result<()> {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission);
        Ok(())
    }

    async fn get(&self, id: &SubmissionId) -> Result<Option<PaymentSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().find(|s| &s.id == id).cloned())
    }

    async fn remove(&self, id: &SubmissionId) -> Result<Option<PaymentSubmission>> {
        let mut submissions = self.submissions.write().await;
        match submissions.iter().position(|s| &s.id == id) {
            Some(index) => Ok(Some(submissions.remove(index))),
            None => Ok(None),
        }
    }

    async fn all(&self) -> Result<Vec<PaymentSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.clone())
    }
}

/// A thread-safe in-memory archive of resolved submissions.
///
/// Append-only; kept in resolution order so audit history reads back the way
/// decisions were made.
#[derive(Default, Clone)]
pub struct InMemoryArchive {
    submissions: Arc<RwLock<Vec<PaymentSubmission>>>,
}

impl InMemoryArchive {
    /// Creates a new, empty in-memory archive.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArchiveStore for InMemoryArchive {
    async fn store(&self, submission: PaymentSubmission) -> Result<()> {
        let mut submissions = self.submissions.write().await;
        submissions.push(submission);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<PaymentSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.clone())
    }
}
