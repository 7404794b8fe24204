//! Application layer: intake-form processing and configuration

pub mod config;
pub mod intake;

pub use intake::{submit, IntakeForm};
