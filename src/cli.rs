//! Run orchestration.
//!
//! Wires the filter configuration, the organizer's three filesystem phases,
//! and the output formatting into one run per validated `(path, simulate)`
//! pair:
//!
//! 1. collision pre-pass (always, simulate included)
//! 2. category folder provisioning (real runs only)
//! 3. snapshot of the directory listing, then classify and move/report
//! 4. summary block
//!
//! The summary is returned as well as printed so callers (and the
//! integration tests) can assert on counts.

use crate::category::CategoryMapper;
use crate::config::FilterConfig;
use crate::organizer::{MoveOutcome, OrganizeError, Organizer, Summary};
use crate::output::OutputFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Organizes `base_path` with the default (permissive) filter configuration.
pub fn run(base_path: &Path, simulate: bool) -> Result<Summary, String> {
    run_with_config(base_path, simulate, None)
}

/// Organizes `base_path`, optionally loading filter rules from
/// `config_path`.
///
/// Returns the per-category summary on success. A filesystem failure in any
/// phase aborts the run; files moved before the failure stay moved — there
/// is no rollback, and re-running on the partially organized directory is
/// safe.
pub fn run_with_config(
    base_path: &Path,
    simulate: bool,
    config_path: Option<&Path>,
) -> Result<Summary, String> {
    if !base_path.is_dir() {
        return Err(OrganizeError::InvalidBasePath {
            path: base_path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "base path does not exist or is not a directory",
            ),
        }
        .to_string());
    }

    let config = FilterConfig::load(config_path)
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let filters = config
        .compile()
        .map_err(|e| format!("Error compiling filters: {}", e))?;

    if simulate {
        OutputFormatter::info(&format!(
            "Simulating organization of: {}",
            base_path.display()
        ));
    } else {
        OutputFormatter::info(&format!("Organizing contents of: {}", base_path.display()));
    }

    // The pre-pass is a safety precondition for folder creation and runs in
    // every mode; provisioning is what simulate skips.
    Organizer::sweep_name_collisions(base_path).map_err(|e| e.to_string())?;
    if !simulate {
        Organizer::provision_category_dirs(base_path).map_err(|e| e.to_string())?;
    }

    // Snapshot the listing before any move.
    let entries = fs::read_dir(base_path).map_err(|e| {
        OrganizeError::DirectoryReadFailed {
            path: base_path.to_path_buf(),
            source: e,
        }
        .to_string()
    })?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            let file_path = entry.path();
            if filters.should_include(&file_path) {
                files.push(file_path);
            }
        }
    }

    let mapper = CategoryMapper::default();
    let mut summary = Summary::new();

    if simulate {
        for file_path in &files {
            let plan = Organizer::plan_move(base_path, file_path, &mapper);
            println!(
                "{}",
                OutputFormatter::simulate_line(&plan.file_name, plan.category.dir_name())
            );
            summary.record(plan.category);
        }
    } else {
        let pb = OutputFormatter::create_progress_bar(files.len() as u64);
        for file_path in &files {
            let plan = Organizer::plan_move(base_path, file_path, &mapper);
            match Organizer::execute_move(&plan) {
                Ok(MoveOutcome::Moved) => {
                    pb.println(OutputFormatter::move_line(
                        &plan.file_name,
                        plan.category.dir_name(),
                    ));
                }
                // Already at its resolved location: counted, not reported.
                Ok(MoveOutcome::SkippedInPlace) => {}
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e.to_string());
                }
            }
            summary.record(plan.category);
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    OutputFormatter::print_summary(&summary);

    Ok(summary)
}
