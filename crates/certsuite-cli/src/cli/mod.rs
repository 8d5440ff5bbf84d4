//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for the comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Titled plain-text tables (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

const COMPARE_LONG_ABOUT: &str = "\
Compares sections of two claim files and prints the differences as one table per section.

Useful when some test case results differ between two runs: configuration differences in the
suite config or in the cluster nodes are often the cause.

Every section except the test case results is compared blindly. The whole JSON subtree is
flattened into a list of /path/to/field=value entries and the two lists are compared by path.
Three tables are printed per section:
 - Differences: same field, different values.
 - Only in CLAIM 1: fields of claim file 1 missing from claim file 2.
 - Only in CLAIM 2: fields of claim file 2 missing from claim file 1.

Sections are compared in this order:
 - claim.versions
 - claim.results
 - claim.configurations.Config (plus abnormal event counts)
 - claim.nodes.nodeSummary (labels and annotations only)
 - claim.nodes.cniPlugins
 - claim.nodes.csiDriver
 - claim.nodes.nodesHwInfo";

/// Subcommands of `certsuite claim`.
#[derive(Subcommand)]
pub enum ClaimCommand {
    /// Compare two claim files.
    #[command(
        long_about = COMPARE_LONG_ABOUT,
        after_help = "Example: certsuite claim compare -1 claim1.json -2 claim2.json"
    )]
    Compare {
        /// First claim file to compare, or `-` for stdin.
        #[arg(long, short = '1', value_name = "FILE")]
        claim1: PathOrStdin,
        /// Second claim file to compare, or `-` for stdin (not both).
        #[arg(long, short = '2', value_name = "FILE")]
        claim2: PathOrStdin,
    },
}

/// All top-level subcommands exposed by the `certsuite` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Work with claim files produced by a certification run.
    Claim {
        /// Claim subcommand.
        #[command(subcommand)]
        command: ClaimCommand,
    },
}

/// Root CLI struct for the `certsuite` binary.
///
/// Global flags are marked `global = true` so clap accepts them after any
/// subcommand.
#[derive(Parser)]
#[command(
    name = "certsuite",
    version,
    about = "CNF certification suite claim file tools",
    long_about = "Tools for working with claim files produced by the CNF certification suite.\n\
                  Compares the versions, test case results, configuration and cluster node\n\
                  sections of two claim files."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr: input sizes and per-section difference
    /// counts (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CERTSUITE_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "CERTSUITE_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,
}
