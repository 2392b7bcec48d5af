use crate::error::ReviewError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a payment submission, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SubmissionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque handle to captured image evidence (a URI in the mock data).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

/// Represents a positive monetary amount in FCFA units.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety; submitted amounts are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ReviewError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ReviewError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ReviewError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A student's photographic proof of payment, reviewed by an administrator.
///
/// `status` and `rejection_reason` are private: they only change together,
/// through [`approve`](Self::approve) and [`reject`](Self::reject). A reason
/// exists exactly when the submission is rejected, and both resolved states
/// are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSubmission {
    pub id: SubmissionId,
    pub receipt_number: String,
    pub amount: Amount,
    #[serde(default)]
    status: SubmissionStatus,
    pub image_url: ImageRef,
    pub date: NaiveDate,
    #[serde(default)]
    rejection_reason: Option<String>,
}

impl PaymentSubmission {
    pub fn new(
        id: SubmissionId,
        receipt_number: impl Into<String>,
        amount: Amount,
        image_url: ImageRef,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            receipt_number: receipt_number.into(),
            amount,
            status: SubmissionStatus::Pending,
            image_url,
            date,
            rejection_reason: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Transitions the submission to `Approved`. Only valid from `Pending`.
    pub fn approve(&mut self) -> Result<(), ReviewError> {
        if self.status != SubmissionStatus::Pending {
            return Err(ReviewError::ValidationError(format!(
                "Submission {} is not pending",
                self.id
            )));
        }
        self.status = SubmissionStatus::Approved;
        Ok(())
    }

    /// Transitions the submission to `Rejected`, recording the reason in the
    /// same step. Only valid from `Pending`, and the reason must be non-empty.
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), ReviewError> {
        let reason = reason.into();
        if reason.is_empty() {
            return Err(ReviewError::PreconditionError(
                "Rejection reason must not be empty".to_string(),
            ));
        }
        if self.status != SubmissionStatus::Pending {
            return Err(ReviewError::ValidationError(format!(
                "Submission {} is not pending",
                self.id
            )));
        }
        self.status = SubmissionStatus::Rejected;
        self.rejection_reason = Some(reason);
        Ok(())
    }
}
