//! The vehicle sum type and its validated constructors

use serde::{Deserialize, Serialize};

use dealer_types::{Error, Result, VehicleKind};

/// Wheel count every car records, regardless of caller input
const CAR_WHEELS: u32 = 4;
/// Seat count every motorcycle records
const MOTORCYCLE_SEATS: u32 = 2;
/// Wheel count every trailer records, regardless of caller input
const TRAILER_WHEELS: u32 = 6;

/// A vehicle on the dealership lot
///
/// One variant per kind the dealership trades in. Values are built through
/// the validated constructors below and never mutated afterwards; there are
/// no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Vehicle {
    Car {
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
    },
    Motorcycle {
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
    },
    Scooter {
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
    },
    Van {
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
        max_cargo: i64,
    },
    Trailer {
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
        max_cargo: i64,
    },
}

impl Vehicle {
    /// Build a car. Cars always record 4 wheels; the caller-supplied wheel
    /// count is discarded before the minimum-wheel rule runs, so the rule
    /// can never trip. The pass-through is intentional, not a silent fix.
    pub fn car(
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
    ) -> Result<Self> {
        let _ = wheels;
        let wheels = CAR_WHEELS;
        if wheels < 4 {
            return Err(Error::validation("a car cannot have fewer than 4 wheels"));
        }
        Ok(Vehicle::Car {
            wheels,
            engine,
            seats,
            color,
            model,
        })
    }

    /// Build a motorcycle. Seats are pinned to 2; any seat rule on caller
    /// input is enforced at the intake boundary, not here.
    pub fn motorcycle(
        wheels: u32,
        engine: String,
        color: String,
        model: String,
    ) -> Result<Self> {
        if wheels < 2 {
            return Err(Error::validation(
                "a motorcycle cannot have fewer than 2 wheels",
            ));
        }
        Ok(Vehicle::Motorcycle {
            wheels,
            engine,
            seats: MOTORCYCLE_SEATS,
            color,
            model,
        })
    }

    /// Build a scooter. Seats are pinned to 0.
    pub fn scooter(wheels: u32, engine: String, color: String, model: String) -> Result<Self> {
        if wheels < 2 {
            return Err(Error::validation(
                "a scooter cannot have fewer than 2 wheels",
            ));
        }
        Ok(Vehicle::Scooter {
            wheels,
            engine,
            seats: 0,
            color,
            model,
        })
    }

    /// Build a van. Wheels and seats come from the caller; `max_cargo` is
    /// stored verbatim.
    pub fn van(
        wheels: u32,
        engine: String,
        seats: u32,
        color: String,
        model: String,
        max_cargo: i64,
    ) -> Result<Self> {
        if wheels > 6 {
            return Err(Error::validation("a van cannot have more than 6 wheels"));
        }
        Ok(Vehicle::Van {
            wheels,
            engine,
            seats,
            color,
            model,
            max_cargo,
        })
    }

    /// Build a trailer. Wheels are pinned to 6 and seats to 0; like `car`,
    /// the pinning happens before the minimum-wheel rule runs, so the rule
    /// can never trip regardless of the caller's wheel count.
    pub fn trailer(
        wheels: u32,
        engine: String,
        color: String,
        model: String,
        max_cargo: i64,
    ) -> Result<Self> {
        let _ = wheels;
        let wheels = TRAILER_WHEELS;
        if wheels < 6 {
            return Err(Error::validation("a trailer must have at least 6 wheels"));
        }
        Ok(Vehicle::Trailer {
            wheels,
            engine,
            seats: 0,
            color,
            model,
            max_cargo,
        })
    }

    /// Kind tag of this vehicle
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Car { .. } => VehicleKind::Car,
            Vehicle::Motorcycle { .. } => VehicleKind::Motorcycle,
            Vehicle::Scooter { .. } => VehicleKind::Scooter,
            Vehicle::Van { .. } => VehicleKind::Van,
            Vehicle::Trailer { .. } => VehicleKind::Trailer,
        }
    }

    pub fn wheels(&self) -> u32 {
        match self {
            Vehicle::Car { wheels, .. }
            | Vehicle::Motorcycle { wheels, .. }
            | Vehicle::Scooter { wheels, .. }
            | Vehicle::Van { wheels, .. }
            | Vehicle::Trailer { wheels, .. } => *wheels,
        }
    }

    pub fn engine(&self) -> &str {
        match self {
            Vehicle::Car { engine, .. }
            | Vehicle::Motorcycle { engine, .. }
            | Vehicle::Scooter { engine, .. }
            | Vehicle::Van { engine, .. }
            | Vehicle::Trailer { engine, .. } => engine,
        }
    }

    pub fn seats(&self) -> u32 {
        match self {
            Vehicle::Car { seats, .. }
            | Vehicle::Motorcycle { seats, .. }
            | Vehicle::Scooter { seats, .. }
            | Vehicle::Van { seats, .. }
            | Vehicle::Trailer { seats, .. } => *seats,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Vehicle::Car { color, .. }
            | Vehicle::Motorcycle { color, .. }
            | Vehicle::Scooter { color, .. }
            | Vehicle::Van { color, .. }
            | Vehicle::Trailer { color, .. } => color,
        }
    }

    /// Model name, the value the listing query returns
    pub fn model(&self) -> &str {
        match self {
            Vehicle::Car { model, .. }
            | Vehicle::Motorcycle { model, .. }
            | Vehicle::Scooter { model, .. }
            | Vehicle::Van { model, .. }
            | Vehicle::Trailer { model, .. } => model,
        }
    }

    /// Maximum cargo in kilograms; only vans and trailers carry one
    pub fn max_cargo(&self) -> Option<i64> {
        match self {
            Vehicle::Van { max_cargo, .. } | Vehicle::Trailer { max_cargo, .. } => {
                Some(*max_cargo)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_pins_wheels_to_four() {
        for input in [0, 3, 4, 99] {
            let car = Vehicle::car(
                input,
                "V8".to_string(),
                4,
                "red".to_string(),
                "Model S".to_string(),
            )
            .unwrap();
            assert_eq!(car.wheels(), 4);
            assert_eq!(car.seats(), 4);
            assert_eq!(car.kind(), VehicleKind::Car);
        }
    }

    #[test]
    fn test_motorcycle_wheel_rule() {
        let too_few = Vehicle::motorcycle(
            1,
            "250cc".to_string(),
            "black".to_string(),
            "Ninja".to_string(),
        );
        assert!(matches!(too_few, Err(Error::Validation(_))));

        let ok = Vehicle::motorcycle(
            2,
            "250cc".to_string(),
            "black".to_string(),
            "Ninja".to_string(),
        )
        .unwrap();
        assert_eq!(ok.wheels(), 2);
        assert_eq!(ok.seats(), 2);
    }

    #[test]
    fn test_scooter_wheel_rule_and_pinned_seats() {
        assert!(Vehicle::scooter(
            1,
            "electric".to_string(),
            "white".to_string(),
            "Xiaomi M365".to_string()
        )
        .is_err());

        let ok = Vehicle::scooter(
            2,
            "electric".to_string(),
            "white".to_string(),
            "Xiaomi M365".to_string(),
        )
        .unwrap();
        assert_eq!(ok.seats(), 0);
        assert_eq!(ok.kind(), VehicleKind::Scooter);
    }

    #[test]
    fn test_van_wheel_rule_and_cargo() {
        let too_many = Vehicle::van(
            7,
            "diesel".to_string(),
            3,
            "blue".to_string(),
            "Transit".to_string(),
            1200,
        );
        assert!(matches!(too_many, Err(Error::Validation(_))));

        let ok = Vehicle::van(
            6,
            "diesel".to_string(),
            3,
            "blue".to_string(),
            "Transit".to_string(),
            1200,
        )
        .unwrap();
        assert_eq!(ok.wheels(), 6);
        assert_eq!(ok.max_cargo(), Some(1200));
    }

    #[test]
    fn test_trailer_never_fails_wheel_check() {
        for input in [0, 1, 5, 6, 12] {
            let trailer = Vehicle::trailer(
                input,
                "none".to_string(),
                "grey".to_string(),
                "Flatbed".to_string(),
                20000,
            )
            .unwrap();
            assert_eq!(trailer.wheels(), 6);
            assert_eq!(trailer.seats(), 0);
            assert_eq!(trailer.max_cargo(), Some(20000));
        }
    }

    #[test]
    fn test_non_cargo_kinds_have_no_max_cargo() {
        let car = Vehicle::car(
            4,
            "V6".to_string(),
            5,
            "green".to_string(),
            "Corolla".to_string(),
        )
        .unwrap();
        assert_eq!(car.max_cargo(), None);
    }
}
