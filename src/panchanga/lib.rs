//! # Panchanga Architecture
//!
//! Panchanga computes the Hindu lunisolar calendar for a date and place and
//! draws it, with weather and the moon, as a set of boxed terminal panels.
//! It is a library with a thin CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints, saves the config file          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the Fetcher      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - Resolve place → calculate → build panels → compose       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────┬─────────────────┬──────────────────────────┐
//! │  calendar/     │  layout/        │  location, geocode,      │
//! │  astro/        │  moon           │  weather, net/, data     │
//! └────────────────┴─────────────────┴──────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing
//! exits the process. Diagnostics go through `tracing`; the binary decides
//! whether to show them.
//!
//! ## Time Conventions
//!
//! Astronomy works in Julian days (UT). Calendar results are reported in
//! local clock hours from midnight of the requested civil date, using the
//! UTC offset in force on that date.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: report assembly and the `CmdResult` types
//! - [`calendar`]: tithi, nakshatra, yoga, karana, masa and friends, plus
//!   Sanskrit names
//! - [`astro`]: solar and lunar positions, ayanamsa, rise and set
//! - [`layout`]: bordered text blocks and their composition
//! - [`moon`]: ASCII moon-phase panel
//! - [`location`]: place to coordinates and UTC offset
//! - [`geocode`]: online place lookup
//! - [`weather`]: wttr.in weather panel
//! - [`net`]: HTTP seam with production and in-memory fetchers
//! - [`data`]: bundled name and city tables
//! - [`config`]: saved default place
//! - [`model`]: `Moment`, `Place`, `Hms`
//! - [`error`]: error types
//! - `cli`: argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod astro;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod geocode;
pub mod layout;
pub mod location;
pub mod model;
pub mod moon;
pub mod net;
pub mod weather;
