//! Page classification from file paths
//!
//! Only modules under a `pages` routing directory are rewritten. API routes
//! and the framework's scaffolding files (`_app`, `_document`, `_error`) are
//! left alone. Paths are split on the host separator.

use fob_gen::TransformContext;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Routing root directory name
pub const PAGES_DIR: &str = "pages";

/// API routes live directly under the routing root in this directory
pub const API_DIR: &str = "api";

/// Framework files under `pages` that are not ordinary pages
pub const SCAFFOLDING_FILES: [&str; 3] = ["_app", "_document", "_error"];

/// Source extensions a page module may have
pub const PAGE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Why a module is not rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `pages` directory in the path
    NotAPage,
    /// `pages/api/...`
    ApiRoute,
    /// `_app`, `_document` or `_error` with a page extension
    Scaffolding,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAPage => write!(f, "not inside a `{PAGES_DIR}` directory"),
            Self::ApiRoute => write!(f, "API route"),
            Self::Scaffolding => write!(f, "framework scaffolding file"),
        }
    }
}

/// Path substituted when the host does not know the module's file name
pub fn default_page_path() -> String {
    format!("{PAGES_DIR}{MAIN_SEPARATOR}Default.js")
}

/// Path used for classification: the file name relative to `cwd`, or the
/// synthetic default page when there is none
pub fn page_path(ctx: &TransformContext) -> String {
    ctx.relative_filename()
        .map(str::to_string)
        .unwrap_or_else(default_page_path)
}

/// Classify `path`; `None` means the module is a page and gets rewritten
///
/// A `pages` directory segment is required. Past that, the API and
/// scaffolding rules are plain substring tests, so `pages/api-v2/...` and
/// `pages/my_app.tsx` are skipped too.
pub fn skip_reason(path: &str) -> Option<SkipReason> {
    let mut dirs = path.split(MAIN_SEPARATOR).rev().skip(1);
    if !dirs.any(|segment| segment == PAGES_DIR) {
        return Some(SkipReason::NotAPage);
    }

    if path.contains(&format!("{PAGES_DIR}{MAIN_SEPARATOR}{API_DIR}")) {
        return Some(SkipReason::ApiRoute);
    }

    if is_scaffolding_file(path) {
        return Some(SkipReason::Scaffolding);
    }

    None
}

/// True when the module at `path` must not be rewritten
pub fn should_skip(path: &str) -> bool {
    skip_reason(path).is_some()
}

fn is_scaffolding_file(path: &str) -> bool {
    SCAFFOLDING_FILES.iter().any(|name| {
        PAGE_EXTENSIONS
            .iter()
            .any(|ext| path.contains(&format!("{name}.{ext}")))
    })
}
