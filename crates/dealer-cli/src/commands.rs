//! Command handlers

use std::path::Path;

use dealer_app::config::Config;
use dealer_app::intake::submit;
use dealer_infra::load_forms;
use dealer_store::Dealership;
use dealer_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_count, output_models, output_report};

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Report {
            forms,
            kind_counts_only,
        } => {
            let lot = build_lot(&forms, cli.verbose)?;
            output_report(format, &lot, kind_counts_only)
        }
        Commands::Count { forms, kind } => {
            let lot = build_lot(&forms, cli.verbose)?;
            output_count(format, &kind, lot.count_by_kind(&kind))
        }
        Commands::Models { forms } => {
            let lot = build_lot(&forms, cli.verbose)?;
            output_models(format, &lot.model_names())
        }
        Commands::Config { show, set_format } => cmd_config(show, set_format),
    }
}

/// Run every intake form through the pipeline. Rows that fail validation
/// are reported and skipped; the lot is never left with a partial entry.
fn build_lot(forms_path: &Path, verbose: bool) -> Result<Dealership> {
    let mut forms = load_forms(forms_path)?;
    let mut lot = Dealership::new();

    for (index, form) in forms.iter_mut().enumerate() {
        match submit(form, &mut lot) {
            Ok(kind) => {
                if verbose {
                    eprintln!("row {}: added {}", index + 1, kind);
                }
            }
            Err(e) => eprintln!("row {}: skipped: {}", index + 1, e),
        }
    }

    Ok(lot)
}

fn cmd_config(show: bool, set_format: Option<OutputFormat>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(format) = set_format {
        config.output_format = format;
        config.save()?;
        println!("Output format set to {}", format);
        return Ok(());
    }

    if show {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("Config file: {}", Config::config_path()?.display());
        println!("Use --show to display, --set-format to change");
    }

    Ok(())
}
