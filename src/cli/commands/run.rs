use anyhow::{ Context, Result };
use log::info;
use serde::Serialize;
use std::path::Path;

use property_registry::implementations::script::{ load_script, Operation };
use property_registry::{ CallResult, Registry, RegistryConfig };

use crate::cli::{ ui, OutputFormat };

#[derive(Serialize)]
struct ScriptStep<'a> {
    operation: &'a Operation,
    result: &'a CallResult,
}

/// Replay a script of operations, optionally starting from and saving a snapshot
pub fn execute(
    config: RegistryConfig,
    script_path: &Path,
    state_path: Option<&Path>,
    save: bool,
    format: OutputFormat
) -> Result<()> {
    let operations = load_script(script_path).with_context(||
        format!("Failed to load script {}", script_path.display())
    )?;
    info!("Loaded {} operations from {}", operations.len(), script_path.display());

    let registry = match state_path {
        Some(path) if path.exists() => {
            Registry::load_snapshot(path, config).with_context(||
                format!("Failed to load state {}", path.display())
            )?
        }
        _ => Registry::new(config),
    };

    let mut steps = Vec::with_capacity(operations.len());
    for operation in &operations {
        steps.push((operation, operation.apply(&registry)));
    }
    let failures = steps.iter().filter(|(_, result)| !result.success).count();

    match format {
        OutputFormat::Json => {
            let report: Vec<ScriptStep<'_>> = steps
                .iter()
                .map(|(operation, result)| ScriptStep { operation: *operation, result })
                .collect();
            ui::print_json(&report)?;
        }
        OutputFormat::Text => {
            ui::print_header("Replaying Operations");
            for (index, (operation, result)) in steps.iter().enumerate() {
                ui::print_call_result(index, &operation.to_string(), result);
            }
            println!();
            if failures == 0 {
                ui::print_success(&format!("All {} operations succeeded", steps.len()));
            } else {
                ui::print_warning(&format!("{} of {} operations failed", failures, steps.len()));
            }
        }
    }

    if save {
        if let Some(path) = state_path {
            registry
                .save_snapshot(path)
                .with_context(|| format!("Failed to save state {}", path.display()))?;
            if format == OutputFormat::Text {
                ui::print_info(&format!("State saved to {}", path.display()));
            }
        }
    }

    Ok(())
}
