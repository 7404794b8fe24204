//! Vehicle kind tags

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The closed set of vehicle kinds the dealership trades in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Scooter,
    Van,
    Trailer,
}

impl VehicleKind {
    /// All kinds in report order
    pub const ALL: [VehicleKind; 5] = [
        VehicleKind::Car,
        VehicleKind::Motorcycle,
        VehicleKind::Scooter,
        VehicleKind::Van,
        VehicleKind::Trailer,
    ];

    /// Display name, also the query string for count-by-kind lookups
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle => "Motorcycle",
            VehicleKind::Scooter => "Scooter",
            VehicleKind::Van => "Van",
            VehicleKind::Trailer => "Trailer",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for VehicleKind {
    type Err = String;

    /// Case-insensitive match on the kind name, for free-text intake dispatch
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "motorcycle" => Ok(VehicleKind::Motorcycle),
            "scooter" => Ok(VehicleKind::Scooter),
            "van" => Ok(VehicleKind::Van),
            "trailer" => Ok(VehicleKind::Trailer),
            _ => Err(format!("unrecognized vehicle type: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for kind in VehicleKind::ALL {
            assert_eq!(kind.label().parse::<VehicleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("CAR".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!("tRaIlEr".parse::<VehicleKind>().unwrap(), VehicleKind::Trailer);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("submarine".parse::<VehicleKind>().is_err());
    }
}
