//! Domain layer: the vehicle sum type and inventory services

pub mod model;
pub mod service;

pub use model::Vehicle;
