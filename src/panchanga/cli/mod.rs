//! # CLI Layer
//!
//! One UI client for the library. This is the only code that:
//! - parses arguments (clap)
//! - installs the `tracing` subscriber
//! - writes to stdout/stderr
//! - reads and writes the config file on the user's behalf
//!
//! ## Structure
//!
//! - [`setup`]: the clap `Cli` definition and version string
//! - [`commands`]: `run()`, which builds the request and calls the API
//! - [`print`]: turns a `CmdResult` into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
