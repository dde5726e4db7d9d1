//! Command-line interface orchestration for view-graph filtering.
//!
//! The single `filter` command reads a pair list, keeps the largest reliable
//! set of views and optionally writes the pairs that survive pruning.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FilterCommand, StrategyArg, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
