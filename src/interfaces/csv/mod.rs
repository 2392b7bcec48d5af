pub mod action_reader;
pub mod gesture_reader;
pub mod submission_reader;
pub mod submission_writer;
