//! fob-superjson - wrap Next.js page data loaders and components with superjson.
//!
//! Parses arguments, sets up logging and colors, and dispatches the command.

use clap::Parser;
use fob_superjson_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Transform(transform_args) => commands::transform_execute(transform_args),
        cli::Command::Classify(classify_args) => commands::classify_execute(classify_args),
    };

    result.map_err(error::cli_error_to_miette)
}
