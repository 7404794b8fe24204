//! In-memory store for the dealership lot

mod dealership;

pub use dealership::Dealership;
