use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::Style;
use hexpick_core::config::PickerConfig;
use hexpick_core::io::load_image;
use hexpick_core::sampler::{sample_neighborhood, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

#[derive(Args)]
pub struct SampleArgs {
    /// Input image files
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Pixel column
    #[arg(long)]
    pub x: u32,

    /// Pixel row
    #[arg(long)]
    pub y: u32,

    /// Averaging radius; the window is (2r+1)x(2r+1) pixels
    #[arg(long)]
    pub radius: Option<u32>,
}

enum Outcome {
    Sampled(Rgb),
    OutOfBounds { width: u32, height: u32 },
    Failed(String),
}

pub fn run(args: &SampleArgs, config: &PickerConfig) -> Result<()> {
    let radius = args.radius.unwrap_or(config.sampler.radius);
    let total = args.images.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Decoding images");

    let outcomes: Vec<Outcome> = args
        .images
        .par_iter()
        .map(|path| {
            let outcome = match load_image(path) {
                Ok(record) => match sample_neighborhood(&record.pixels, args.x, args.y, radius) {
                    Some(color) => Outcome::Sampled(color),
                    None => Outcome::OutOfBounds {
                        width: record.width(),
                        height: record.height(),
                    },
                },
                Err(e) => Outcome::Failed(e.to_string()),
            };
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let label = Style::new().dim();
    let hex = Style::new().green().bold();
    let warn = Style::new().yellow();
    let error = Style::new().red();

    let side = radius * 2 + 1;
    println!(
        "\nPixel ({}, {}), {side}x{side} average:",
        args.x, args.y
    );
    let mut failed = 0;
    for (path, outcome) in args.images.iter().zip(&outcomes) {
        let name = path.display();
        match outcome {
            Outcome::Sampled(color) => {
                println!("  {:<40} {}", label.apply_to(name), hex.apply_to(color.to_hex()));
            }
            Outcome::OutOfBounds { width, height } => {
                failed += 1;
                println!(
                    "  {:<40} {}",
                    label.apply_to(name),
                    warn.apply_to(format!("outside {width}x{height} image"))
                );
            }
            Outcome::Failed(message) => {
                failed += 1;
                println!("  {:<40} {}", label.apply_to(name), error.apply_to(message));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} image(s) could not be sampled");
    }
    Ok(())
}
