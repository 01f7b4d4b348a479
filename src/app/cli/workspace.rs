//! `init`, `status` and `paths` commands.

use std::path::PathBuf;

use crate::app::api::{self, DirStatus, ProvisionOutcome};
use crate::domain::AppError;

fn root_or_default(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    api::resolve_workspace_root(root.as_deref())
}

pub fn run_init(root: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let report = api::init_at(root_or_default(root)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let created = report.created_count();
    println!(
        "✅ Workspace ready at {} ({} created, {} already present)",
        report.root.display(),
        created,
        report.entries.len() - created
    );
    for dir in &report.entries {
        let marker = match dir.outcome {
            ProvisionOutcome::Created => "+",
            ProvisionOutcome::Existing => " ",
        };
        println!("  {} {:<18} {}", marker, dir.entry.role, dir.entry.display_path());
    }
    Ok(())
}

pub fn run_status(root: Option<PathBuf>, json: bool) -> Result<i32, AppError> {
    let report = api::status_at(root_or_default(root)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.exit_code());
    }

    for entry in &report.entries {
        let label = match entry.status {
            DirStatus::Present => "present",
            DirStatus::Missing => "missing",
            DirStatus::Blocked => "blocked",
        };
        println!("  {:<8} {:<18} {}", label, entry.entry.role, entry.entry.display_path());
    }

    if report.is_complete() {
        println!("✅ Workspace complete");
    } else {
        println!("⚠️  Workspace incomplete. Run 'calws init' to create missing directories.");
    }
    Ok(report.exit_code())
}

pub fn run_paths(root: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let paths = api::paths_at(root_or_default(root)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    for path in &paths {
        println!("{}", path.display_path());
    }
    Ok(())
}
