//! Shared utilities for command implementations.
//!
//! - Module discovery from file and directory arguments
//! - The per-module [`TransformContext`]

use crate::config::SuperJsonConfig;
use crate::error::{CliError, Result};
use fob_gen::TransformContext;
use fob_superjson::classify::PAGE_EXTENSIONS;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand `paths` into the set of modules to process, sorted and deduplicated.
///
/// Files are taken as given. Directories are walked for page extensions,
/// skipping any directory named in the config's `ignore` list.
pub fn discover_modules(paths: &[PathBuf], config: &SuperJsonConfig) -> Result<Vec<PathBuf>> {
    let mut modules = BTreeSet::new();

    for path in paths {
        let path = std::path::absolute(path)?;
        if path.is_file() {
            modules.insert(path);
            continue;
        }
        if !path.is_dir() {
            return Err(CliError::FileNotFound(path));
        }

        let walker = WalkDir::new(&path).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !config.is_ignored(&entry.file_name().to_string_lossy())
        });
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && has_page_extension(entry.path()) {
                modules.insert(entry.into_path());
            }
        }
    }

    tracing::debug!(count = modules.len(), "discovered modules");
    Ok(modules.into_iter().collect())
}

/// Context handed to the rewriter for `module` under `root`
pub fn module_context(module: &Path, root: &Path) -> TransformContext {
    TransformContext::for_file(module.to_string_lossy()).with_cwd(root.to_string_lossy())
}

/// `module` relative to `root` for display, or as-is when outside it
pub fn display_path<'p>(module: &'p Path, root: &Path) -> &'p Path {
    module.strip_prefix(root).unwrap_or(module)
}

fn has_page_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}
