use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use sidecar::descriptor::{UploadMode, assemble_record, descriptor_path, write_descriptor};

use crate::errors::CliError;

/// Main handler for both subcommands: validates every input up front,
/// then generates one descriptor per input, sequentially or on a worker
/// pool.
pub fn handle_generate(
    inputs: &[PathBuf],
    collection: &str,
    mode: &UploadMode,
    parallel: bool,
) -> Result<(), CliError> {
    // Precondition pass: every input must exist and be readable before
    // any descriptor is written.
    for input in inputs {
        validate_input(input)?;
    }

    if parallel {
        generate_parallel(inputs, collection, mode)
    } else {
        generate_sequential(inputs, collection, mode)
    }
}

/// Rejects inputs that would fail mid-run: missing, not a regular file,
/// or unreadable.
fn validate_input(input: &Path) -> Result<(), CliError> {
    if !input.is_file() {
        return Err(CliError::InputNotFound(input.to_path_buf()));
    }
    fs::File::open(input).map_err(|source| CliError::InputNotReadable {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Generates the descriptor for a single input file.
fn generate_one(input: &Path, collection: &str, mode: &UploadMode) -> Result<(), CliError> {
    let record = assemble_record(input, collection, mode)?;
    let output_path = descriptor_path(input)?;
    write_descriptor(&record, &output_path)?;
    Ok(())
}

/// Sequential processing: each file is fully processed before the next
/// begins, and the first failure aborts the remaining inputs.
fn generate_sequential(
    inputs: &[PathBuf],
    collection: &str,
    mode: &UploadMode,
) -> Result<(), CliError> {
    for input in inputs {
        generate_one(input, collection, mode)?;
    }
    println!("Generated {} descriptor(s).", inputs.len());
    Ok(())
}

/// Parallel processing: every file's pipeline is independent, so the batch
/// runs on a worker pool. All inputs are attempted; the run still fails if
/// any of them could not be described.
fn generate_parallel(
    inputs: &[PathBuf],
    collection: &str,
    mode: &UploadMode,
) -> Result<(), CliError> {
    let total = inputs.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [Describing] [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .map_err(|e| CliError::Unexpected(e.to_string()))?
            .progress_chars("#>-"),
    );

    let fail_count = AtomicUsize::new(0);

    inputs.par_iter().for_each(|input| {
        if let Err(e) = generate_one(input, collection, mode) {
            fail_count.fetch_add(1, Ordering::SeqCst);
            pb.println(format!("FAILED to describe {:?}: {}", input, e));
        }
        pb.inc(1);
    });

    pb.finish_with_message("Batch complete.");

    let failed = fail_count.load(Ordering::SeqCst);
    println!("{} succeeded, {} failed.", total - failed, failed);
    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}
