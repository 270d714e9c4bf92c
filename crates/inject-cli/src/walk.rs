//! Candidate file discovery.
//!
//! Uses the `ignore` crate for directory walking. By default every file is
//! visited (generated sources are frequently gitignored); with
//! `walk.respect_gitignore` the standard ignore files apply, inside or
//! outside a git checkout, plus a custom `.injectignore`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ignore::WalkBuilder;
use inject_config::WalkConfig;

/// Custom ignore file honoured when `respect_gitignore` is on.
const IGNORE_FILE: &str = ".injectignore";

/// Build a file walker over `root` configured by `walk`.
pub fn build_walker(root: &Path, walk: &WalkConfig) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);

    if walk.respect_gitignore {
        builder.require_git(false);
        builder.add_custom_ignore_filename(IGNORE_FILE);
    } else {
        // Disable all default filters (gitignore, hidden, etc.)
        builder.standard_filters(false);
    }
    builder.hidden(!walk.include_hidden);

    builder.build()
}

/// Collect the files under `root` whose name contains the configured marker,
/// sorted by path.
///
/// # Errors
/// Fails on the first directory entry that cannot be read.
pub fn candidate_files(root: &Path, walk: &WalkConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in build_walker(root, walk) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if walk.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    tracing::debug!(root = %root.display(), candidates = files.len(), "walked");
    Ok(files)
}
