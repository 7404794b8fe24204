//! Infrastructure layer for the dealership inventory

pub mod intake_file;

pub use intake_file::{load_forms, load_forms_from_csv, load_forms_from_json};
