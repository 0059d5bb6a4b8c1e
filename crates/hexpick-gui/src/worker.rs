use std::path::{Path, PathBuf};
use std::sync::mpsc;

use rayon::prelude::*;

use hexpick_core::io::{load_image, read_text};
use hexpick_core::library::BatchId;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("hexpick-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeImages { batch, paths } => {
                handle_decode_images(batch, &paths, &tx, &ctx);
            }
            WorkerCommand::ReadCsv { path } => {
                handle_read_csv(&path, &tx, &ctx);
            }
            WorkerCommand::WriteFile { path, bytes } => {
                handle_write_file(path, &bytes, &tx, &ctx);
            }
        }
    }
}

/// Decode a batch in parallel. Every path reports exactly once, success or
/// not, so the session's completion counter always reaches the total.
fn handle_decode_images(
    batch: BatchId,
    paths: &[PathBuf],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    tracing::info!(batch = batch.0, count = paths.len(), "decoding image batch");
    paths
        .par_iter()
        .enumerate()
        .for_each_with(tx.clone(), |tx, (index, path)| {
            let result = load_image(path).map_err(|e| format!("{}: {e}", path.display()));
            send(tx, ctx, WorkerResult::ImageDecoded { batch, index, result });
        });
}

fn handle_read_csv(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match read_text(path) {
        Ok((file_name, text)) => send(tx, ctx, WorkerResult::CsvRead { file_name, text }),
        Err(e) => send_error(tx, ctx, format!("Failed to read {}: {e}", path.display())),
    }
}

fn handle_write_file(
    path: PathBuf,
    bytes: &[u8],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match std::fs::write(&path, bytes) {
        Ok(()) => send(tx, ctx, WorkerResult::FileWritten { path }),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}
