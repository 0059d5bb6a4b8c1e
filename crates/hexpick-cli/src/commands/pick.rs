use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hexpick_core::config::PickerConfig;
use hexpick_core::io::{load_image, read_text};
use hexpick_core::status::Severity;
use hexpick_core::table::base_name;
use hexpick_core::transform::Point;
use hexpick_core::{Effect, Event, Session};

use crate::summary;

#[derive(Args)]
pub struct PickArgs {
    /// Color CSV file
    pub csv: PathBuf,

    /// Reference image
    pub image: PathBuf,

    /// Row to fill, numbered from 1
    #[arg(long)]
    pub row: usize,

    /// Pixel column
    #[arg(long)]
    pub x: u32,

    /// Pixel row
    #[arg(long)]
    pub y: u32,

    /// Repair the CSV without asking if it lacks required columns
    #[arg(long)]
    pub yes: bool,

    /// Output file (defaults to `<csv name>_with_hex.csv`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print the status effects of one dispatch and fail on the first error.
fn apply(session: &mut Session, event: Event) -> Result<Vec<Effect>> {
    let fx = session.dispatch(event);
    for effect in &fx {
        if let Effect::Status { message, severity } = effect {
            summary::print_status(message, *severity);
            if *severity == Severity::Error {
                bail!("{message}");
            }
        }
    }
    Ok(fx)
}

pub fn run(args: &PickArgs, config: &PickerConfig) -> Result<()> {
    let Some(row) = args.row.checked_sub(1) else {
        bail!("Rows are numbered from 1");
    };

    let mut session = Session::new(config.clone())?;

    let (file_name, text) = read_text(&args.csv)
        .with_context(|| format!("Failed to read {}", args.csv.display()))?;
    let base = base_name(&file_name);
    apply(&mut session, Event::CsvLoaded { file_name, text })?;
    if let Some(prompt) = session.pending_repair() {
        summary::print_repair_prompt(&base, prompt);
        let accept = args.yes;
        apply(&mut session, Event::RepairDecision { accept })?;
        if !accept {
            bail!("CSV import cancelled (pass --yes to repair)");
        }
    }

    let record = load_image(&args.image)
        .with_context(|| format!("Failed to load {}", args.image.display()))?;
    // A canvas the size of the image maps pixel centers one-to-one.
    apply(
        &mut session,
        Event::CanvasResized {
            size: record.size(),
        },
    )?;
    let fx = apply(&mut session, Event::ImagesSelected { count: 1 })?;
    let Some(batch) = fx.iter().find_map(|e| match e {
        Effect::DecodeImages { batch, .. } => Some(*batch),
        _ => None,
    }) else {
        bail!("No image batch was started");
    };
    apply(
        &mut session,
        Event::ImageDecoded {
            batch,
            index: 0,
            result: Ok(record),
        },
    )?;

    apply(&mut session, Event::StartPicking { row })?;
    apply(
        &mut session,
        Event::Clicked {
            pos: Point::new(args.x as f64 + 0.5, args.y as f64 + 0.5),
        },
    )?;
    if session.picking().is_active() {
        bail!("Pixel ({}, {}) is outside the image", args.x, args.y);
    }

    let fx = apply(&mut session, Event::ExportCsv)?;
    let Some((file_name, bytes)) = fx.into_iter().find_map(|e| match e {
        Effect::Download {
            file_name, bytes, ..
        } => Some((file_name, bytes)),
        _ => None,
    }) else {
        bail!("Nothing was exported");
    };

    let path = args.output.clone().unwrap_or_else(|| PathBuf::from(file_name));
    std::fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved {}", path.display());

    Ok(())
}
