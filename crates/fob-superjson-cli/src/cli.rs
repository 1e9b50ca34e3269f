//! Command-line interface definition.
//!
//! - `fob-superjson transform <PATH>...` rewrites page modules
//! - `fob-superjson classify <PATH>...` reports which modules would be rewritten

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fob-superjson - superjson serialization for Next.js pages
#[derive(Parser, Debug)]
#[command(
    name = "fob-superjson",
    version,
    about = "Wrap Next.js page data loaders and components with superjson",
    long_about = "Rewrites modules under a pages/ directory so getServerSideProps,\n\
                  getStaticProps and the default-exported page component go through\n\
                  withSuperJSONProps / withSuperJSONPage from babel-plugin-superjson-next/tools."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite page modules
    ///
    /// Without --write or --check the rewritten code is printed to stdout.
    Transform(TransformArgs),

    /// Show whether each module would be rewritten, and why not
    Classify(ClassifyArgs),
}

/// Options shared by every command that resolves paths
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root; file names are classified relative to it
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Config file (defaults to fob-superjson.json in the project root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the transform command
#[derive(Args, Debug, Clone, Default)]
pub struct TransformArgs {
    /// Files or directories to rewrite
    ///
    /// Directories are searched for .js, .jsx, .ts and .tsx files.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Rewrite files in place
    #[arg(short, long)]
    pub write: bool,

    /// Exit non-zero if any file would be rewritten
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Print string literals with single quotes
    #[arg(long)]
    pub single_quote: bool,
}

/// Arguments for the classify command
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Files or directories to classify
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print one JSON record per module instead of a table
    #[arg(long)]
    pub json: bool,
}
