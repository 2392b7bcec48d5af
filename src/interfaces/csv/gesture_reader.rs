use crate::domain::preview::GestureEvent;
use crate::error::{Result, ReviewError};
use std::io::Read;

/// Reads preview gesture events from a CSV trace.
///
/// Traces carry the columns `event,image,scale,dx,dy`; only the columns
/// meaningful for an event kind need to be filled in.
pub struct GestureReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> GestureReader<R> {
    /// Creates a new `GestureReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes gesture events.
    pub fn events(self) -> impl Iterator<Item = Result<GestureEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ReviewError::from))
    }
}
