use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hexpick_core::io::read_text;
use hexpick_core::table::{base_name, parse, ParseOutcome};

use crate::summary;

#[derive(Args)]
pub struct InspectArgs {
    /// Input CSV file
    pub file: PathBuf,
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let (name, text) = read_text(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let base = base_name(&name);

    match parse(&text).with_context(|| format!("Failed to parse {name}"))? {
        ParseOutcome::Loaded(table) => summary::print_table_summary(&base, &table),
        ParseOutcome::NeedsRepair(prompt) => {
            summary::print_repair_prompt(&base, &prompt);
            eprintln!("  Run `hexpick repair --yes {}` to normalize it.", args.file.display());
        }
    }

    Ok(())
}
