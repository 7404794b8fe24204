//! Intake-form validation pipeline
//!
//! The form carries the raw text a clerk typed, one string per field.
//! `submit` interprets the text, enforces the per-kind intake rules, and on
//! success appends the constructed vehicle to the lot and wipes the form.
//! On any error the form and the lot are left exactly as they were.

use serde::{Deserialize, Serialize};

use dealer_domain::Vehicle;
use dealer_store::Dealership;
use dealer_types::{Error, Result, VehicleKind};

/// Raw intake form fields, unparsed
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IntakeForm {
    /// Free-text kind name, matched case-insensitively
    #[serde(rename = "type")]
    pub vehicle_type: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub wheels: String,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub max_cargo: String,
}

impl IntakeForm {
    /// Wipe every field, as done after a successful submission
    pub fn clear(&mut self) {
        self.vehicle_type.clear();
        self.engine.clear();
        self.wheels.clear();
        self.seats.clear();
        self.color.clear();
        self.model.clear();
        self.max_cargo.clear();
    }
}

/// Interpret a filled form, construct the vehicle and add it to the lot.
///
/// Field interpretation:
/// - `wheels` parses leniently: unreadable text counts as 0 wheels.
/// - `seats` parses strictly: unreadable text aborts the submission.
/// - `type` dispatches case-insensitively over the five kinds.
/// - `max_cargo` is consulted only for vans and trailers, where it must be
///   present and numeric.
///
/// Returns the kind that was added. The form is cleared only on success.
pub fn submit(form: &mut IntakeForm, lot: &mut Dealership) -> Result<VehicleKind> {
    let wheels: u32 = form.wheels.trim().parse().unwrap_or(0);
    let seats: u32 = form
        .seats
        .trim()
        .parse()
        .map_err(|_| Error::parse("seat count", &form.seats))?;

    let kind: VehicleKind = form
        .vehicle_type
        .trim()
        .parse()
        .map_err(Error::Validation)?;

    let vehicle = match kind {
        VehicleKind::Car => Vehicle::car(
            wheels,
            form.engine.clone(),
            seats,
            form.color.clone(),
            form.model.clone(),
        )?,
        VehicleKind::Motorcycle => {
            if seats > 2 {
                return Err(Error::validation(
                    "a motorcycle cannot have more than 2 seats",
                ));
            }
            Vehicle::motorcycle(
                wheels,
                form.engine.clone(),
                form.color.clone(),
                form.model.clone(),
            )?
        }
        VehicleKind::Scooter => {
            if seats != 0 {
                return Err(Error::validation("a scooter cannot have seats"));
            }
            Vehicle::scooter(
                wheels,
                form.engine.clone(),
                form.color.clone(),
                form.model.clone(),
            )?
        }
        VehicleKind::Van => {
            let max_cargo = parse_max_cargo(&form.max_cargo)?;
            Vehicle::van(
                wheels,
                form.engine.clone(),
                seats,
                form.color.clone(),
                form.model.clone(),
                max_cargo,
            )?
        }
        VehicleKind::Trailer => {
            let max_cargo = parse_max_cargo(&form.max_cargo)?;
            Vehicle::trailer(
                wheels,
                form.engine.clone(),
                form.color.clone(),
                form.model.clone(),
                max_cargo,
            )?
        }
    };

    lot.add_vehicle(vehicle);
    form.clear();
    Ok(kind)
}

fn parse_max_cargo(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::validation("max cargo required"));
    }
    raw.parse().map_err(|_| Error::parse("max cargo", raw))
}
