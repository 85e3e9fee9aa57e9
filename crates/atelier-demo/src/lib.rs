#![forbid(unsafe_code)]

//! Scripted page session for Atelier.
//!
//! Drives a [`PageShell`](atelier::runtime::PageShell) through a fixed
//! visitor journey on a manual clock and prints what happened as JSON.

pub mod cli;
pub mod error;
pub mod logging;
pub mod session;

pub use cli::{Cli, ColorScheme, run, run_from_env};
pub use error::{DemoError, Result};
