use crate::domain::submission::PaymentSubmission;
use crate::error::{Result, ReviewError};
use std::io::Read;

/// Reads pending payment submissions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<PaymentSubmission>`. It handles whitespace trimming and flexible
/// record lengths automatically; the `status` column may be omitted and
/// defaults to pending.
pub struct SubmissionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SubmissionReader<R> {
    /// Creates a new `SubmissionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes submissions.
    pub fn submissions(self) -> impl Iterator<Item = Result<PaymentSubmission>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ReviewError::from))
    }
}
