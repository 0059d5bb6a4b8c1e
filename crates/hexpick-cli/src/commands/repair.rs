use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hexpick_core::io::read_text;
use hexpick_core::status::Severity;
use hexpick_core::table::{base_name, parse, repair, serialize, ParseOutcome};

use crate::summary;

#[derive(Args)]
pub struct RepairArgs {
    /// Input CSV file
    pub file: PathBuf,

    /// Apply the repair without asking
    #[arg(long)]
    pub yes: bool,

    /// Write the normalized CSV to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RepairArgs) -> Result<()> {
    let (name, text) = read_text(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let base = base_name(&name);

    let table = match parse(&text).with_context(|| format!("Failed to parse {name}"))? {
        ParseOutcome::Loaded(table) => {
            eprintln!("{name} has every required column; writing it unchanged.");
            table
        }
        ParseOutcome::NeedsRepair(prompt) => {
            summary::print_repair_prompt(&base, &prompt);
            if !args.yes {
                bail!(
                    "Missing required columns: {} (pass --yes to repair)",
                    prompt.missing.join(", ")
                );
            }
            let table = repair(&prompt);
            summary::print_status(
                &format!("CSV cleaned and loaded with {} colors", table.len()),
                Severity::Success,
            );
            table
        }
    };

    let csv = serialize(&table)?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Normalized CSV saved to {}", path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
