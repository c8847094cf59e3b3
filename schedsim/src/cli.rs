//! # Command Line
//!
//! Flags override the configuration file, which overrides the defaults.

use crate::config::{ConfigError, OutputFormat, PolicySelection, SimConfig};
use crate::input::load_descriptors;
use crate::report::{render_text, RunReport};
use crate::runner::run_configured;
use clap::Parser;
use kernel_api::SimError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Command-line error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimError),

    #[error("Failed to encode report: {0}")]
    Encode(String),
}

#[derive(Debug, Parser)]
#[command(name = "schedsim")]
#[command(about = "Discrete-time CPU scheduling simulator")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Record file of `creation_time duration priority` triples
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// fcfs, sjf, srtf, priority, priority-preemptive, round-robin or all
    #[arg(short, long)]
    pub policy: Option<PolicySelection>,

    /// Round-robin quantum in ticks
    #[arg(short, long)]
    pub quantum: Option<u64>,

    /// Process table capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Report format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the effective configuration
    pub fn resolve(&self) -> Result<SimConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };

        if let Some(input) = &self.input {
            config = config.with_input(input.clone());
        }
        if let Some(policy) = self.policy {
            config = config.with_policy(policy);
        }
        if let Some(quantum) = self.quantum {
            config = config.with_quantum(quantum);
        }
        if let Some(capacity) = self.capacity {
            config = config.with_capacity(capacity);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Loads input, runs the selected policies and renders the output
///
/// A missing or unreadable input file is logged once by the loader and
/// simulated as an empty process set.
pub fn execute(config: &SimConfig) -> Result<String, CliError> {
    let descriptors = load_descriptors(&config.input).unwrap_or_default();
    if descriptors.is_empty() {
        warn!(path = %config.input.display(), "No processes to simulate");
    }

    let reports = run_configured(config, &descriptors)?;
    render(&reports, config.format)
}

fn render(reports: &[RunReport], format: OutputFormat) -> Result<String, CliError> {
    let mut out = String::new();
    for report in reports {
        match format {
            OutputFormat::Text => out.push_str(&render_text(report)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report)
                    .map_err(|e| CliError::Encode(e.to_string()))?;
                out.push_str(&json);
                out.push('\n');
            }
        }
    }
    Ok(out)
}
