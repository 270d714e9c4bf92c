//! Injection pipeline: walk → plan every file → write.
//!
//! All candidates are read and planned before the first write, so a file
//! that fails to read or parse aborts the run with nothing rewritten. A
//! failed write aborts the remaining writes; files already written stay
//! written.

use std::path::{Path, PathBuf};

use anyhow::Context;
use inject_config::InjectConfig;
use inject_parser::{FilePlan, plan_bytes};

use crate::walk::candidate_files;

/// Result of an injection run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub scanned: usize,
    pub rewritten: Vec<PathBuf>,
    pub injected: usize,
}

/// Run the injection over every candidate file under `root`.
///
/// # Errors
/// Returns the first walk, read, parse or write failure.
pub fn run(root: &Path, config: &InjectConfig) -> anyhow::Result<RunSummary> {
    let candidates = candidate_files(root, &config.walk)?;
    let plans = plan_all(&candidates)?;

    let mut summary = RunSummary {
        scanned: candidates.len(),
        ..RunSummary::default()
    };
    write_all(plans, &config.splice.indent, &mut summary)?;
    Ok(summary)
}

fn plan_all(candidates: &[PathBuf]) -> anyhow::Result<Vec<(PathBuf, FilePlan)>> {
    let mut plans = Vec::new();
    for path in candidates {
        let content =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        if let Some(plan) = plan_bytes(&path.display().to_string(), content)? {
            plans.push((path.clone(), plan));
        }
    }
    Ok(plans)
}

/// Write plans in order, stopping at the first failure. `summary` records
/// every file written before it.
fn write_all(
    plans: Vec<(PathBuf, FilePlan)>,
    indent: &str,
    summary: &mut RunSummary,
) -> anyhow::Result<()> {
    for (path, plan) in plans {
        write_plan(&path, &plan, indent)?;
        summary.injected += plan.injected_count();
        summary.rewritten.push(path);
    }
    Ok(())
}

fn write_plan(path: &Path, plan: &FilePlan, indent: &str) -> anyhow::Result<()> {
    let rendered = plan.render(indent);
    std::fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        injected = plan.injected_count(),
        "rewrote file"
    );
    Ok(())
}
