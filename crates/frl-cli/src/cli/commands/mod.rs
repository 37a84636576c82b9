//! Command handlers for the `frl` subcommands.

mod load;
mod probe;

pub use load::run_load;
pub use probe::run_probe;
