//! Claim file input: reads a disk file or stdin with a size cap and UTF-8
//! validation.
//!
//! `certsuite-core` never touches the filesystem; all reading happens here.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Label used for stdin in error messages.
const STDIN_LABEL: &str = "-";

/// Reads the entire contents of `source` into a `String`.
///
/// Disk files are size-checked through their metadata before any byte is
/// read. Stdin is read through a capped reader so the buffer never grows past
/// `max_size + 1` bytes.
///
/// # Errors
///
/// Returns a [`CliError`] with exit code 2 when the input is missing,
/// unreadable, larger than `max_size`, or not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let content = match source {
        PathOrStdin::Path(path) => read_file(path, max_size)?,
        PathOrStdin::Stdin => read_stdin(max_size)?,
    };
    tracing::debug!(source = %source, bytes = content.len(), "read claim input");
    Ok(content)
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps an I/O error from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads stdin up to `max_size` bytes. One extra byte is requested so a
/// stream longer than the limit is detected without a second read.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    std::io::stdin()
        .lock()
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: STDIN_LABEL.to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    bytes_to_string(buf, STDIN_LABEL)
}

/// Converts a byte buffer to a `String`, reporting the offset of the first
/// invalid sequence on failure.
fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}
