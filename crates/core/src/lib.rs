//! Runpick Core Library
//!
//! This crate provides the core functionality for runpick, a tool that runs
//! one of the scripts declared in a project's `package.json`, either directly
//! from a name or prefix given on the command line or through an interactive,
//! filterable picker.
//!
//! # Key Features
//!
//! - **Manifest Loading**: Read the `scripts` table of a `package.json`
//! - **Name Matching**: Case-insensitive substring filtering of script names
//! - **Resolution**: Decide between running directly and opening the picker
//! - **Interactive Session**: Drive any [`session::Prompt`] implementation
//! - **Execution**: Run the chosen script and relay its exit code
//!
//! # Examples
//!
//! Resolving a partial name:
//!
//! ```
//! use runpick_core::manifest::ScriptSet;
//! use runpick_core::resolution::{resolve, Resolution};
//!
//! let scripts = ScriptSet::from_pairs([("build", "tsc"), ("lint", "eslint .")]);
//! assert_eq!(
//!     resolve(&scripts.names(), Some("li")),
//!     Resolution::DirectRun("lint".to_string())
//! );
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod manifest;
pub mod matcher;
pub mod resolution;
pub mod session;
