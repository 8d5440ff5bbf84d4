//! Command modules for the `certsuite` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes the
//! already-read inputs and returns `Ok(())` on success or a
//! [`crate::error::CliError`] on failure.
pub mod claim_compare;
