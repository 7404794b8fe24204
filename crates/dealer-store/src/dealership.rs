//! The dealership: an append-only collection of vehicles

use serde::{Deserialize, Serialize};

use dealer_domain::Vehicle;

/// Append-only store of constructed vehicles
///
/// Vehicles keep their insertion order and have no identity beyond their
/// position; duplicates are allowed. Nothing is ever removed or updated,
/// the collection only grows. The store trusts its callers: every vehicle
/// handed to [`add_vehicle`](Dealership::add_vehicle) already passed its
/// constructor's validation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Dealership {
    vehicles: Vec<Vehicle>,
}

impl Dealership {
    /// Create an empty dealership
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle to the lot
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Count the vehicles whose kind name equals `kind_name` exactly
    /// (case-sensitive). Unknown names count zero.
    pub fn count_by_kind(&self, kind_name: &str) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.kind().label() == kind_name)
            .count()
    }

    /// Model names of every vehicle on the lot, in insertion order
    pub fn model_names(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.model().to_string()).collect()
    }

    /// All vehicles in insertion order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Total vehicle count
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(model: &str) -> Vehicle {
        Vehicle::car(
            4,
            "V8".to_string(),
            4,
            "red".to_string(),
            model.to_string(),
        )
        .unwrap()
    }

    fn motorcycle(model: &str) -> Vehicle {
        Vehicle::motorcycle(
            2,
            "250cc".to_string(),
            "black".to_string(),
            model.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_store_queries() {
        let lot = Dealership::new();
        assert!(lot.is_empty());
        assert_eq!(lot.count_by_kind("Car"), 0);
        assert!(lot.model_names().is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut lot = Dealership::new();
        lot.add_vehicle(car("Model S"));
        lot.add_vehicle(motorcycle("Ninja"));
        lot.add_vehicle(car("Corolla"));
        assert_eq!(lot.len(), 3);
        assert_eq!(lot.model_names(), vec!["Model S", "Ninja", "Corolla"]);
    }

    #[test]
    fn test_count_by_kind_exact_match() {
        let mut lot = Dealership::new();
        lot.add_vehicle(car("Model S"));
        lot.add_vehicle(motorcycle("Ninja"));
        assert_eq!(lot.count_by_kind("Car"), 1);
        assert_eq!(lot.count_by_kind("Motorcycle"), 1);
        // Case-sensitive: lowercase does not match
        assert_eq!(lot.count_by_kind("car"), 0);
        assert_eq!(lot.count_by_kind("Submarine"), 0);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut lot = Dealership::new();
        lot.add_vehicle(car("Model S"));
        lot.add_vehicle(car("Model S"));
        assert_eq!(lot.count_by_kind("Car"), 2);
        assert_eq!(lot.model_names(), vec!["Model S", "Model S"]);
    }
}
