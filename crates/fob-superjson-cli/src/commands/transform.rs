//! `fob-superjson transform`
//!
//! Modules are rewritten in parallel, one arena per module. Depending on the
//! configuration the results are printed, written back, or only compared.

use crate::cli::TransformArgs;
use crate::commands::utils::{discover_modules, display_path, module_context};
use crate::config::{ConfigOverrides, SuperJsonConfig};
use crate::error::{CliError, Result};
use crate::ui;
use fob_gen::{Allocator, FormatOptions, TransformOutput};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One successfully processed module
#[derive(Debug)]
pub struct RewrittenModule {
    pub path: PathBuf,
    pub output: TransformOutput,
}

/// Execute the transform command.
pub fn execute(args: TransformArgs) -> Result<()> {
    let config = SuperJsonConfig::load(&args.project, ConfigOverrides::from_transform(&args))?;
    let root = config.project_root()?;
    let modules = discover_modules(&args.paths, &config)?;
    if modules.is_empty() {
        ui::warning("No modules found");
        return Ok(());
    }

    let format = config.format_options();
    let mut results: Vec<Result<RewrittenModule>> = modules
        .par_iter()
        .map(|module| rewrite_module(module, &root, &format))
        .collect();

    if results.len() == 1 && results[0].is_err() {
        return results.remove(0).map(|_| ());
    }

    let total = results.len();
    let mut rewritten = Vec::with_capacity(total);
    let mut failed = 0;
    for result in results {
        match result {
            Ok(module) => rewritten.push(module),
            Err(err) => {
                failed += 1;
                ui::error(&err.to_string());
            }
        }
    }

    if config.check {
        check(&rewritten, &root)?;
    } else if config.write {
        write(&rewritten, &root)?;
    } else {
        print(&rewritten, &root, total > 1)?;
    }

    if failed > 0 {
        return Err(CliError::RewriteFailed { failed, total });
    }
    Ok(())
}

/// Read, rewrite and print one module
pub fn rewrite_module(path: &Path, root: &Path, format: &FormatOptions) -> Result<RewrittenModule> {
    let source = fs::read_to_string(path)?;
    let allocator = Allocator::default();
    let ctx = module_context(path, root);

    let output = fob_superjson::transform(&allocator, &source, &ctx, format.clone()).map_err(
        |source| CliError::Rewrite {
            path: path.to_path_buf(),
            source,
        },
    )?;

    if output.modified {
        tracing::debug!(
            path = %display_path(path, root).display(),
            changes = ?output.diagnostics,
            "rewrote module"
        );
    }
    Ok(RewrittenModule {
        path: path.to_path_buf(),
        output,
    })
}

fn check(rewritten: &[RewrittenModule], root: &Path) -> Result<()> {
    let stale: Vec<PathBuf> = rewritten
        .iter()
        .filter(|module| module.output.modified)
        .map(|module| display_path(&module.path, root).to_path_buf())
        .collect();

    if !stale.is_empty() {
        return Err(CliError::CheckFailed { files: stale });
    }
    ui::success(&format!("{} module(s) checked, nothing to rewrite", rewritten.len()));
    Ok(())
}

fn write(rewritten: &[RewrittenModule], root: &Path) -> Result<()> {
    let mut count = 0;
    for module in rewritten.iter().filter(|module| module.output.modified) {
        fs::write(&module.path, &module.output.code)?;
        tracing::info!(path = %display_path(&module.path, root).display(), "wrote module");
        count += 1;
    }

    ui::success(&format!(
        "Rewrote {count} of {} module(s) {}",
        rewritten.len(),
        ui::dim(&format!("in {}", root.display()))
    ));
    Ok(())
}

fn print(rewritten: &[RewrittenModule], root: &Path, with_headers: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for module in rewritten {
        if with_headers {
            writeln!(out, "// {}", display_path(&module.path, root).display())?;
        }
        out.write_all(module.output.code.as_bytes())?;
        if with_headers && !module.output.code.ends_with('\n') {
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
