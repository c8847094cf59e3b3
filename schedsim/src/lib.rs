//! # schedsim
//!
//! Command-line front end for the scheduling simulator.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: the engine never prints; this crate loads input and
//!   renders reports
//! - **Reports are read-only**: rendering consumes a finished run
//! - **Degrade, don't crash**: a missing input file is an empty simulation
//!
//! ## Responsibilities
//!
//! - Load configuration (JSON file, then command-line overrides)
//! - Load process descriptors from a whitespace-separated record file
//! - Run one policy, or every policy in turn
//! - Render the timeline chart and statistics, or a JSON report

pub mod cli;
pub mod config;
pub mod input;
pub mod report;
pub mod runner;

pub use cli::{Cli, CliError};
pub use config::{ConfigError, OutputFormat, PolicySelection, SimConfig, CONFIG_VERSION};
pub use input::{load_descriptors, parse_descriptors, InputError};
pub use report::{render_chart, render_stats, render_text, RunReport};
pub use runner::{run_configured, run_policy};
