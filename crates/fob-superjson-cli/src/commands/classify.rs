//! `fob-superjson classify`

use crate::cli::ClassifyArgs;
use crate::commands::utils::{discover_modules, display_path, module_context};
use crate::config::{ConfigOverrides, SuperJsonConfig};
use crate::error::Result;
use crate::ui;
use fob_superjson::SkipReason;
use fob_superjson::classify::{page_path, skip_reason};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Verdict for one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub path: PathBuf,
    pub skipped: Option<SkipReason>,
}

/// `--json` output record
#[derive(Debug, Serialize)]
struct ClassificationRecord {
    path: String,
    rewrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<&Classification> for ClassificationRecord {
    fn from(verdict: &Classification) -> Self {
        Self {
            path: verdict.path.to_string_lossy().into_owned(),
            rewrite: verdict.skipped.is_none(),
            reason: verdict.skipped.map(|reason| reason.to_string()),
        }
    }
}

/// Classify `module` the same way the rewriter does
pub fn classify_module(module: &Path, root: &Path) -> Classification {
    let ctx = module_context(module, root);
    Classification {
        path: display_path(module, root).to_path_buf(),
        skipped: skip_reason(&page_path(&ctx)),
    }
}

/// Execute the classify command.
pub fn execute(args: ClassifyArgs) -> Result<()> {
    let config = SuperJsonConfig::load(&args.project, ConfigOverrides::from_project(&args.project))?;
    let root = config.project_root()?;
    let modules = discover_modules(&args.paths, &config)?;

    let verdicts: Vec<Classification> = modules
        .iter()
        .map(|module| classify_module(module, &root))
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let records: Vec<ClassificationRecord> = verdicts.iter().map(Into::into).collect();
        serde_json::to_writer_pretty(&mut out, &records).map_err(std::io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut pages = 0;
    for verdict in &verdicts {
        match verdict.skipped {
            None => {
                pages += 1;
                writeln!(out, "rewrite  {}", verdict.path.display())?;
            }
            Some(reason) => {
                let reason = ui::dim(&format!("({reason})"));
                writeln!(out, "skip     {}  {reason}", verdict.path.display())?;
            }
        }
    }
    out.flush()?;

    ui::info(&format!("{pages} of {} module(s) would be rewritten", verdicts.len()));
    Ok(())
}
