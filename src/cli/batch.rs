//! Batch command implementation.

use super::output::{BatchStats, format_batch_text};
use super::{CliError, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tactician::protocol::read_snapshot;
use tactician::{Engine, TacticsConfig};
use tracing::warn;

/// Execute the batch command.
///
/// Snapshots are independent, so they are decided in parallel and the
/// per-thread statistics merged at the end.
///
/// # Errors
///
/// Returns an error if the progress bar or output cannot be set up.
pub(crate) fn execute(
    snapshots: &[PathBuf],
    config: TacticsConfig,
    threads: Option<usize>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let pb = if progress {
        let pb = ProgressBar::new(snapshots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} snapshots ({per_sec})",
                )
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let engine = Engine::new(config);
    let start = Instant::now();

    let stats = snapshots
        .par_iter()
        .fold(BatchStats::default, |mut local, path| {
            match read_snapshot(path) {
                Ok(turn) => local.add_actions(&engine.compute_actions(&turn)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping snapshot");
                    local.add_failure();
                }
            }
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            local
        })
        .reduce(BatchStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            print!("{}", format_batch_text(&stats));
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)?;
            println!("{json}");
        }
    }
    Ok(())
}
