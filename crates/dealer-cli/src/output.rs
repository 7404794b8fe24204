//! Output formatting module

use serde_json::json;

use dealer_domain::service::{generate_inventory_report, generate_kind_count_report, summarize};
use dealer_store::Dealership;
use dealer_types::{OutputFormat, Result};

pub fn output_report(
    output_format: OutputFormat,
    lot: &Dealership,
    kind_counts_only: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let summary = summarize(lot.vehicles());
        if kind_counts_only {
            println!("{}", serde_json::to_string_pretty(&summary.counts)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    } else if kind_counts_only {
        print!("{}", generate_kind_count_report(lot.vehicles()));
    } else {
        print!("{}", generate_inventory_report(lot.vehicles()));
    }

    Ok(())
}

pub fn output_count(output_format: OutputFormat, kind_name: &str, count: usize) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = json!({ "kind": kind_name, "count": count });
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("Count of {}: {}", kind_name, count);
    }

    Ok(())
}

pub fn output_models(output_format: OutputFormat, models: &[String]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        println!("List of vehicles by name: [{}]", models.join(", "));
    }

    Ok(())
}
