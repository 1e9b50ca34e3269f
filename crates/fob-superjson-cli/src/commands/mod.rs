//! Command implementations.
//!
//! - [`transform`] - Rewrite page modules
//! - [`classify`] - Report which modules would be rewritten
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod classify;
pub mod transform;
pub(crate) mod utils;

pub use classify::execute as classify_execute;
pub use transform::execute as transform_execute;
