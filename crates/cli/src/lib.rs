//! Runpick CLI Library
//!
//! This crate provides the command-line interface for runpick: argument
//! parsing and the terminal picker that the core's interactive session drives.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`picker`]: Terminal UI implementing [`runpick_core::session::Prompt`]
//!
//! # Examples
//!
//! The CLI binary (`rp`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the script picker
//! rp
//!
//! # Exact name or unique part of a name runs right away
//! rp lint
//! rp lin
//!
//! # Ambiguous text opens the picker already filtered
//! rp t
//!
//! # Use another package manager
//! rp --runner pnpm build
//!
//! # Dry run (don't execute, just show what would run)
//! rp --dry-run dev
//! ```

pub mod cli_args;
pub mod picker;
