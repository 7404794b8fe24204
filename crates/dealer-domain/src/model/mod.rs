//! Domain model definitions

mod vehicle;

pub use vehicle::Vehicle;
