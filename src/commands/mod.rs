//! CLI subcommand implementations.

pub mod help;
pub mod simulate;
