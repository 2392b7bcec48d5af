pub mod account;
pub mod action;
pub mod ports;
pub mod preview;
pub mod submission;
