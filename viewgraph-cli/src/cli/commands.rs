//! Command implementations and argument parsing for the viewgraph CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use viewgraph_core::{
    PairFileError, Retention, RetentionStrategy, ViewGraphFilterBuilder, read_pairs, write_pairs,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "viewgraph",
    about = "Keep the most reliable views of a multi-view pair graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Filter a pair list down to its largest reliable component.
    Filter(FilterCommand),
}

/// Options accepted by the `filter` command.
#[derive(Debug, Args, Clone)]
pub struct FilterCommand {
    /// Pair list with one `I J [K ...]` line per anchor view.
    pub pairs: PathBuf,

    /// Retention policy.
    #[arg(long, value_enum, default_value_t = StrategyArg::BiEdge)]
    pub strategy: StrategyArg,

    /// Write the pairs between retained views to this path.
    #[arg(long = "pruned-pairs", value_name = "PATH")]
    pub pruned_pairs: Option<PathBuf>,
}

/// Retention policies selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Keep the largest connected component.
    Cc,
    /// Remove bridges, then keep the largest remaining component.
    BiEdge,
}

impl From<StrategyArg> for RetentionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Cc => Self::LargestConnected,
            StrategyArg::BiEdge => Self::LargestBiEdgeConnected,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening, creating or writing a file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The pair list could not be parsed.
    #[error("failed to load `{path}`: {source}")]
    PairFile {
        /// Pair list being read.
        path: PathBuf,
        /// Parse failure, carrying the offending line.
        #[source]
        source: PairFileError,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Number of distinct pairs read from the input file.
    pub input_pairs: usize,
    /// Retained views and run diagnostics.
    pub retention: Retention<u32>,
    /// Where the surviving pairs were written, when requested.
    pub pruned_pairs_path: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when a file cannot be read or written, or when the
/// pair list is malformed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::collections::BTreeSet;
/// # use viewgraph_cli::cli::{Cli, Command, FilterCommand, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 2 3\n2 3\n3 4\n")?;
/// let cli = Cli {
///     command: Command::Filter(FilterCommand {
///         pairs: file.path().to_path_buf(),
///         strategy: StrategyArg::BiEdge,
///         pruned_pairs: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.retention.retained(), &BTreeSet::from([1, 2, 3]));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Filter(filter) => {
            Span::current().record("command", field::display("filter"));
            run_filter(filter)
        }
    }
}

#[instrument(
    name = "cli.filter",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty),
)]
pub(super) fn run_filter(command: FilterCommand) -> Result<ExecutionSummary, CliError> {
    let FilterCommand {
        pairs: pairs_path,
        strategy,
        pruned_pairs,
    } = command;
    let strategy = RetentionStrategy::from(strategy);
    let span = Span::current();
    span.record("path", field::display(pairs_path.display()));
    span.record("strategy", field::display(strategy));

    let pairs = load_pairs(&pairs_path)?;
    let retention = ViewGraphFilterBuilder::new()
        .with_strategy(strategy)
        .with_pruned_pairs(pruned_pairs.is_some())
        .build()
        .run(&pairs);

    if let Some(path) = &pruned_pairs {
        let surviving = surviving_pairs(&pairs, &retention);
        store_pairs(path, &surviving)?;
    }

    info!(
        retained = retention.retained().len(),
        input_pairs = pairs.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        input_pairs: pairs.len(),
        retention,
        pruned_pairs_path: pruned_pairs,
    })
}

/// Pairs to write back: the pruned graph on the bi-edge path, otherwise the
/// input pairs whose endpoints were both retained.
pub(super) fn surviving_pairs(pairs: &[(u32, u32)], retention: &Retention<u32>) -> Vec<(u32, u32)> {
    match retention.pruned_pairs() {
        Some(pruned) => pruned.to_vec(),
        None => pairs
            .iter()
            .filter(|(first, second)| {
                retention.retained().contains(first) && retention.retained().contains(second)
            })
            .copied()
            .collect(),
    }
}

#[instrument(name = "cli.read_pairs", err, fields(path = %path.display()))]
pub(super) fn load_pairs(path: &Path) -> Result<Vec<(u32, u32)>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_pairs(BufReader::new(file)).map_err(|source| CliError::PairFile {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(
    name = "cli.write_pairs",
    err,
    skip(pairs),
    fields(path = %path.display(), pairs = pairs.len()),
)]
pub(super) fn store_pairs(path: &Path, pairs: &[(u32, u32)]) -> Result<(), CliError> {
    let to_cli_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_cli_error)?;
    let mut writer = BufWriter::new(file);
    write_pairs(&mut writer, pairs).map_err(to_cli_error)?;
    writer.flush().map_err(to_cli_error)
}

/// Renders `summary` to `writer`: a header of run diagnostics followed by
/// one retained view id per line, ascending.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = summary.retention.report();
    writeln!(writer, "strategy: {}", report.strategy())?;
    writeln!(writer, "views: {}", report.node_count())?;
    writeln!(writer, "pairs: {}", summary.input_pairs)?;
    writeln!(writer, "bridges removed: {}", report.bridges_removed())?;
    writeln!(writer, "components: {}", report.component_count())?;
    writeln!(writer, "retained: {}", report.retained_nodes())?;
    if let Some(path) = &summary.pruned_pairs_path {
        writeln!(writer, "pruned pairs: {}", path.display())?;
    }
    for view in summary.retention.retained() {
        writeln!(writer, "{view}")?;
    }
    Ok(())
}
