//! # Simulation Configuration
//!
//! Versioned JSON configuration. Every field has a default, so an empty
//! object `{}` is a valid configuration.
//!
//! ```json
//! {
//!   "version": 1,
//!   "input": "entrada.txt",
//!   "policy": "round-robin",
//!   "quantum": 2,
//!   "capacity": 100,
//!   "format": "text"
//! }
//! ```

use policy::{PolicyKind, DEFAULT_QUANTUM};
use serde::{Deserialize, Serialize};
use sim_kernel::SimulatorConfig;
use std::fmt;
use std::fs;
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Current configuration format version
pub const CONFIG_VERSION: u32 = 1;

/// Default record file, relative to the working directory
pub const DEFAULT_INPUT: &str = "entrada.txt";

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Invalid config: {0}")]
    Parse(String),

    #[error("Unsupported config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Quantum must be at least 1 tick")]
    ZeroQuantum,

    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// Which policies to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PolicySelection {
    One(PolicyKind),
    All,
}

impl PolicySelection {
    pub fn kinds(&self) -> Vec<PolicyKind> {
        match self {
            PolicySelection::One(kind) => vec![*kind],
            PolicySelection::All => PolicyKind::ALL.to_vec(),
        }
    }
}

impl Default for PolicySelection {
    fn default() -> Self {
        PolicySelection::One(PolicyKind::Fcfs)
    }
}

impl FromStr for PolicySelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(PolicySelection::All);
        }
        s.parse::<PolicyKind>()
            .map(PolicySelection::One)
            .map_err(|_| ConfigError::UnknownPolicy(s.to_string()))
    }
}

impl TryFrom<String> for PolicySelection {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PolicySelection> for String {
    fn from(selection: PolicySelection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for PolicySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicySelection::One(kind) => write!(f, "{}", kind),
            PolicySelection::All => f.write_str("all"),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Timeline chart followed by statistics
    #[default]
    Text,
    /// One JSON document per run
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Front-end configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub version: u32,
    /// Record file with `creation_time duration priority` triples
    pub input: PathBuf,
    pub policy: PolicySelection,
    /// Round-robin time slice in ticks
    pub quantum: u64,
    /// Process table capacity
    pub capacity: usize,
    pub format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            input: PathBuf::from(DEFAULT_INPUT),
            policy: PolicySelection::default(),
            quantum: DEFAULT_QUANTUM,
            capacity: SimulatorConfig::default().capacity,
            format: OutputFormat::default(),
        }
    }
}

impl SimConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }
        self.quantum_ticks()?;
        Ok(())
    }

    /// The quantum as a non-zero tick count
    pub fn quantum_ticks(&self) -> Result<NonZeroU64, ConfigError> {
        NonZeroU64::new(self.quantum).ok_or(ConfigError::ZeroQuantum)
    }

    /// Engine configuration for this front-end configuration
    pub fn simulator_config(&self) -> SimulatorConfig {
        SimulatorConfig::default().with_capacity(self.capacity)
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_policy(mut self, policy: PolicySelection) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = quantum;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
