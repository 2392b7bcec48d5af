use crate::config::RejectionReasons;
use crate::domain::action::{ActionKind, ReviewAction};
use crate::domain::ports::{ArchiveStoreBox, QueueStoreBox};
use crate::domain::submission::{PaymentSubmission, SubmissionId};
use crate::error::{Result, ReviewError};

/// A rejection staged in the dialog but not yet committed.
///
/// Exists only while the rejection form is open; discarded by
/// [`ReviewWorkflow::cancel_reject`], committed and cleared by
/// [`ReviewWorkflow::confirm_reject`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRejection {
    pub id: SubmissionId,
    pub reason: String,
}

/// The administrator-facing review workflow.
///
/// Owns the queue of pending submissions and the transition rules. Approval
/// and rejection move submissions out of the queue into the archive so audit
/// history is never discarded. Rejection is a two-step flow: the reason is
/// staged through `begin_reject` and the reason setters, then committed
/// atomically by `confirm_reject`.
///
/// Every id-based operation treats an unknown or already-resolved id as a
/// benign no-op: double-taps and stale UI events must not crash or corrupt
/// state.
pub struct ReviewWorkflow {
    queue: QueueStoreBox,
    archive: ArchiveStoreBox,
    reasons: RejectionReasons,
    pending_rejection: Option<PendingRejection>,
}

impl ReviewWorkflow {
    /// Creates a new `ReviewWorkflow` instance.
    ///
    /// # Arguments
    ///
    /// * `queue` - The store holding submissions awaiting review.
    /// * `archive` - The store receiving resolved submissions.
    /// * `reasons` - The predefined rejection reasons.
    pub fn new(queue: QueueStoreBox, archive: ArchiveStoreBox, reasons: RejectionReasons) -> Self {
        Self {
            queue,
            archive,
            reasons,
            pending_rejection: None,
        }
    }

    /// Enqueues a new pending submission. A duplicate id is ignored.
    pub async fn submit(&self, submission: PaymentSubmission) -> Result<()> {
        if !submission.is_pending() {
            return Err(ReviewError::ValidationError(format!(
                "Submission {} is not pending",
                submission.id
            )));
        }
        if self.queue.get(&submission.id).await?.is_some() {
            return Ok(());
        }
        self.queue.push(submission).await
    }

    /// Approves a pending submission and archives it.
    pub async fn approve(&self, id: &SubmissionId) -> Result<()> {
        if let Some(mut submission) = self.queue.remove(id).await? {
            submission.approve()?;
            self.archive.store(submission).await?;
        }
        Ok(())
    }

    /// Stages a rejection for the given submission with an empty reason.
    ///
    /// Does not mutate the submission; nothing is committed until
    /// `confirm_reject`. No-op if the id is not queued.
    pub async fn begin_reject(&mut self, id: &SubmissionId) -> Result<()> {
        if self.queue.get(id).await?.is_some() {
            self.pending_rejection = Some(PendingRejection {
                id: id.clone(),
                reason: String::new(),
            });
        }
        Ok(())
    }

    /// Overwrites the staged reason with a predefined choice. Last write wins,
    /// whether it came from a predefined choice or free text.
    pub fn select_predefined_reason(&mut self, reason: impl Into<String>) {
        self.set_reason_text(reason);
    }

    /// Overwrites the staged reason with free text. No-op when nothing is
    /// staged.
    pub fn set_reason_text(&mut self, reason: impl Into<String>) {
        if let Some(pending) = &mut self.pending_rejection {
            pending.reason = reason.into();
        }
    }

    /// Commits the staged rejection: the submission leaves the queue and is
    /// archived as rejected with the staged reason, then staging is cleared.
    ///
    /// Refused with no state change when nothing is staged or the staged
    /// reason is empty. A staged id that left the queue in the meantime
    /// clears the staging silently.
    pub async fn confirm_reject(&mut self) -> Result<()> {
        match self.pending_rejection.take() {
            None => Err(ReviewError::PreconditionError(
                "No rejection staged".to_string(),
            )),
            Some(pending) if pending.reason.is_empty() => {
                self.pending_rejection = Some(pending);
                Err(ReviewError::PreconditionError(
                    "Rejection reason must not be empty".to_string(),
                ))
            }
            Some(pending) => {
                if let Some(mut submission) = self.queue.remove(&pending.id).await? {
                    submission.reject(pending.reason)?;
                    self.archive.store(submission).await?;
                }
                Ok(())
            }
        }
    }

    /// Discards any staged rejection without mutating submissions. Idempotent.
    pub fn cancel_reject(&mut self) {
        self.pending_rejection = None;
    }

    /// Processes one decision from an actions stream.
    ///
    /// An approval maps directly onto [`approve`](Self::approve). A rejection
    /// replays the full staging sequence: begin, set the reason (routed
    /// through the predefined list when it matches), confirm. A refused
    /// confirm cancels the staging and surfaces the error.
    pub async fn process_action(&mut self, action: ReviewAction) -> Result<()> {
        match action.action {
            ActionKind::Approve => self.approve(&action.id).await,
            ActionKind::Reject => {
                self.begin_reject(&action.id).await?;
                if self.pending_rejection.is_none() {
                    // Unknown or already-resolved id.
                    return Ok(());
                }
                let reason = action.reason.unwrap_or_default();
                if self.reasons.contains(&reason) {
                    self.select_predefined_reason(reason);
                } else {
                    self.set_reason_text(reason);
                }
                match self.confirm_reject().await {
                    Ok(()) => Ok(()),
                    Err(err) => {
                        self.cancel_reject();
                        Err(err)
                    }
                }
            }
        }
    }

    pub fn pending_rejection(&self) -> Option<&PendingRejection> {
        self.pending_rejection.as_ref()
    }

    pub fn reasons(&self) -> &RejectionReasons {
        &self.reasons
    }

    /// Submissions still awaiting review, in arrival order.
    pub async fn queue(&self) -> Result<Vec<PaymentSubmission>> {
        self.queue.all().await
    }

    /// Resolved submissions, in resolution order.
    pub async fn archive(&self) -> Result<Vec<PaymentSubmission>> {
        self.archive.all().await
    }

    /// Consumes the workflow and returns every submission: still-pending
    /// first, then the archive in resolution order.
    pub async fn into_results(self) -> Result<Vec<PaymentSubmission>> {
        let mut results = self.queue.all().await?;
        results.extend(self.archive.all().await?);
        Ok(results)
    }
}
