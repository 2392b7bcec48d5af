use crate::domain::action::ReviewAction;
use crate::error::{Result, ReviewError};
use std::io::Read;

/// Reads administrator review decisions from a CSV source.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions.
    pub fn actions(self) -> impl Iterator<Item = Result<ReviewAction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ReviewError::from))
    }
}
