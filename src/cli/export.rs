//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{FinboardError, FinboardResult};
use crate::export::{export, ExportFormat, ExportTarget};
use crate::session::Session;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// What to export: expenses, budgets or all
    pub target: ExportTarget,

    /// csv, json or yaml
    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(session: &mut Session, args: ExportArgs) -> FinboardResult<()> {
    let records = session.records()?;

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                FinboardError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export(records, args.target, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinboardError::Export(e.to_string()))?;

            println!(
                "Exported {} as {} to: {}",
                target_name(args.target),
                args.format,
                output.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export(records, args.target, args.format, &mut handle)?;
            handle
                .flush()
                .map_err(|e| FinboardError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

fn target_name(target: ExportTarget) -> &'static str {
    match target {
        ExportTarget::Transactions => "transactions",
        ExportTarget::Budgets => "budgets",
        ExportTarget::All => "all records",
    }
}
