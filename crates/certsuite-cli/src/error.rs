//! CLI error types with associated exit codes.
//!
//! Every [`CliError`] variant maps to a stable exit code via
//! [`CliError::exit_code`]:
//!
//! - **2**: input failure. A claim file could not be read or decoded, so no
//!   comparison ran.
//! - **1**: the comparison could not be assembled or written out.
//!
//! Differences between the claims are not an error; the tool exits 0.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `certsuite` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A claim file could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a claim file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// Offset of the first invalid byte.
        byte_offset: usize,
    },

    /// Reading stdin failed.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error while reading an input.
    IoError {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A claim file is not a valid claim document.
    ParseFailed {
        /// Which claim failed and the decoder message.
        detail: String,
    },

    /// Both `--claim1` and `--claim2` were `-`.
    BothStdin,

    // --- Exit code 1: comparison and output failures ---
    /// A report could not be assembled.
    ReportFailed {
        /// The report error message.
        detail: String,
    },

    /// Writing the comparison to stdout failed.
    OutputFailed {
        /// The underlying error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::BothStdin => 2,

            Self::ReportFailed { .. } | Self::OutputFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: failed to decode claim file: {detail}")
            }
            Self::BothStdin => {
                "error: --claim1 and --claim2 cannot both read from stdin".to_owned()
            }
            Self::ReportFailed { detail } => {
                format!("error: failed to compare claim files: {detail}")
            }
            Self::OutputFailed { detail } => {
                format!("error: failed to write output: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
