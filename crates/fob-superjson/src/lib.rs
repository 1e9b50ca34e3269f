//! Superjson support for Next.js pages
//!
//! Rewrites page modules so page data survives the server-to-client handoff
//! even when it holds values plain JSON cannot carry (dates, maps, sets,
//! class instances). For every module under a `pages` directory:
//!
//! - `getServerSideProps` / `getStaticProps` exports are wrapped in
//!   `withSuperJSONProps(...)`
//! - the default-exported page component is wrapped in
//!   `withSuperJSONPage(...)`
//!
//! Both helpers are imported from `babel-plugin-superjson-next/tools`, once
//! per module. API routes and `_app` / `_document` / `_error` are skipped.
//!
//! # Examples
//!
//! ```rust
//! use fob_gen::{Allocator, FormatOptions, TransformContext};
//!
//! let allocator = Allocator::default();
//! let source = "export default function Home() { return null; }";
//! let ctx = TransformContext::for_file("pages/index.js");
//! let output = fob_superjson::transform(&allocator, source, &ctx, FormatOptions::default())?;
//!
//! assert!(output.modified);
//! assert!(output.code.contains("export default _withSuperJSONPage(Home)"));
//! # Ok::<(), fob_gen::GenError>(())
//! ```

pub mod classify;
pub mod locate;
pub mod normalize;
mod pass;
pub mod wrap;

pub use classify::{SkipReason, should_skip, skip_reason};
pub use locate::{DATA_LOADERS, PageExports};
pub use pass::{RewriteReport, SuperJsonPass, rewrite_program};
pub use wrap::{DefaultExportShape, TOOLS_MODULE, WITH_PAGE, WITH_PROPS};

use fob_gen::{Allocator, FormatOptions, Result, TransformContext, TransformEngine, TransformOutput};

/// Parse `source`, run [`SuperJsonPass`] and print the result
///
/// The source type comes from the context's file name. Modules that are not
/// rewritten come back byte for byte.
pub fn transform<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    ctx: &TransformContext,
    format: FormatOptions,
) -> Result<TransformOutput> {
    TransformEngine::new(allocator)
        .with_format_options(format)
        .add_pass(SuperJsonPass)
        .transform(source, ctx)
}
