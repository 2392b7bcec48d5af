use crate::domain::submission::PaymentSubmission;
use crate::error::Result;
use std::io::Write;

/// Writes the final state of submissions to a CSV sink.
pub struct SubmissionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SubmissionWriter<W> {
    /// Creates a new `SubmissionWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the submissions and flushes the sink.
    pub fn write_submissions(&mut self, submissions: Vec<PaymentSubmission>) -> Result<()> {
        for submission in submissions {
            self.writer.serialize(submission)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
