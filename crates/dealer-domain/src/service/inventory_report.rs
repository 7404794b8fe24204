//! Inventory summary service

use serde::{Deserialize, Serialize};

use crate::model::Vehicle;
use dealer_types::VehicleKind;

/// Vehicle count for a single kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: String,
    pub count: usize,
}

/// Per-kind counts plus the ordered model-name listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummary {
    pub counts: Vec<KindCount>,
    pub models: Vec<String>,
    pub total: usize,
}

/// Summarize a lot: one count per kind (report order), model names in
/// insertion order. The counts always sum to `total`.
pub fn summarize(vehicles: &[Vehicle]) -> InventorySummary {
    let counts = VehicleKind::ALL
        .iter()
        .map(|kind| KindCount {
            kind: kind.label().to_string(),
            count: vehicles.iter().filter(|v| v.kind() == *kind).count(),
        })
        .collect();
    let models = vehicles.iter().map(|v| v.model().to_string()).collect();
    InventorySummary {
        counts,
        models,
        total: vehicles.len(),
    }
}

/// Render only the per-kind count lines, one `Count of <kind>: <n>` per
/// kind in report order.
pub fn generate_kind_count_report(vehicles: &[Vehicle]) -> String {
    let summary = summarize(vehicles);
    let mut report = String::new();
    for entry in &summary.counts {
        report.push_str(&format!("Count of {}: {}\n", entry.kind, entry.count));
    }
    report
}

/// Render the full inventory report: the per-kind count lines, then the
/// bracketed model-name listing.
pub fn generate_inventory_report(vehicles: &[Vehicle]) -> String {
    let summary = summarize(vehicles);
    let mut report = generate_kind_count_report(vehicles);
    report.push_str(&format!(
        "List of vehicles by name: [{}]\n",
        summary.models.join(", ")
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lot() -> Vec<Vehicle> {
        vec![
            Vehicle::car(
                4,
                "V8".to_string(),
                4,
                "red".to_string(),
                "Model S".to_string(),
            )
            .unwrap(),
            Vehicle::motorcycle(
                2,
                "250cc".to_string(),
                "black".to_string(),
                "Ninja".to_string(),
            )
            .unwrap(),
            Vehicle::car(
                4,
                "V6".to_string(),
                5,
                "green".to_string(),
                "Corolla".to_string(),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_counts_sum_to_total() {
        let summary = summarize(&sample_lot());
        let sum: usize = summary.counts.iter().map(|c| c.count).sum();
        assert_eq!(sum, summary.total);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_models_in_insertion_order() {
        let summary = summarize(&sample_lot());
        assert_eq!(summary.models, vec!["Model S", "Ninja", "Corolla"]);
    }

    #[test]
    fn test_report_text() {
        let report = generate_inventory_report(&sample_lot());
        assert!(report.contains("Count of Car: 2"));
        assert!(report.contains("Count of Motorcycle: 1"));
        assert!(report.contains("Count of Trailer: 0"));
        assert!(report.contains("List of vehicles by name: [Model S, Ninja, Corolla]"));
    }

    #[test]
    fn test_kind_count_report_has_no_listing() {
        let report = generate_kind_count_report(&sample_lot());
        assert!(report.contains("Count of Car: 2"));
        assert!(report.contains("Count of Motorcycle: 1"));
        assert!(!report.contains("List of vehicles by name"));
    }

    #[test]
    fn test_empty_lot_report() {
        let report = generate_inventory_report(&[]);
        assert!(report.contains("Count of Car: 0"));
        assert!(report.contains("List of vehicles by name: []"));
    }
}
