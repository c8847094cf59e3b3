//! # Input Loader
//!
//! Reads process descriptors from a record file.
//!
//! ## Format
//!
//! Whitespace-separated integer triples, one process per triple:
//!
//! ```text
//! 0 3 0
//! 1 2 0
//! 4 0 1
//! ```
//!
//! The fields are `creation_time duration priority`. Line breaks carry no
//! meaning. Reading stops at the first token that is not an integer or at
//! an incomplete trailing triple; everything read before that point is kept.

use core_types::ProcessDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Input loader error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },
}

/// Parses descriptor triples from `text`
pub fn parse_descriptors(text: &str) -> Vec<ProcessDescriptor> {
    let mut tokens = text.split_whitespace();
    let mut descriptors = Vec::new();

    loop {
        let Some(first) = tokens.next() else {
            break;
        };
        let record = (
            first.parse::<i64>(),
            tokens.next().map(str::parse::<i64>),
            tokens.next().map(str::parse::<i32>),
        );
        match record {
            (Ok(creation_time), Some(Ok(duration)), Some(Ok(priority))) => {
                let input_index = descriptors.len();
                descriptors.push(ProcessDescriptor::new(
                    creation_time,
                    duration,
                    priority,
                    input_index,
                ));
            }
            (_, None, _) | (_, _, None) => {
                warn!(record = descriptors.len(), "Incomplete trailing record ignored");
                break;
            }
            _ => {
                warn!(record = descriptors.len(), "Malformed record, stopped reading");
                break;
            }
        }
    }

    descriptors
}

/// Reads and parses a record file
pub fn load_descriptors(path: &Path) -> Result<Vec<ProcessDescriptor>, InputError> {
    let text = fs::read_to_string(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to open input");
        InputError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let descriptors = parse_descriptors(&text);
    info!(path = %path.display(), processes = descriptors.len(), "Processes read from input");
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn triples(descriptors: &[ProcessDescriptor]) -> Vec<(i64, i64, i32, usize)> {
        descriptors
            .iter()
            .map(|d| (d.creation_time, d.duration, d.priority, d.input_index))
            .collect()
    }

    #[test]
    fn test_parse_one_record_per_line() {
        let parsed = parse_descriptors("0 3 0\n1 2 0\n");
        assert_eq!(triples(&parsed), vec![(0, 3, 0, 0), (1, 2, 0, 1)]);
    }

    #[test]
    fn test_line_breaks_are_not_significant() {
        let parsed = parse_descriptors("0 3\n0 1\n2 5 -1");
        assert_eq!(triples(&parsed), vec![(0, 3, 0, 0), (1, 2, 5, 1)]);
        assert_eq!(parsed[1].priority, 5);
        assert_eq!(parse_descriptors("4 1 -1")[0].priority, -1);
    }

    #[test]
    fn test_stops_at_first_malformed_token() {
        let parsed = parse_descriptors("0 3 0\n1 x 0\n2 2 0\n");
        assert_eq!(triples(&parsed), vec![(0, 3, 0, 0)]);
    }

    #[test]
    fn test_incomplete_trailing_record_is_dropped() {
        let parsed = parse_descriptors("0 3 0 5 1");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_descriptors("").is_empty());
        assert!(parse_descriptors("  \n\t ").is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entrada.txt");
        fs::write(&path, "0 3 0\n1 2 0\n").unwrap();

        let loaded = load_descriptors(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].creation_time, 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(
            load_descriptors(&path),
            Err(InputError::Open { .. })
        ));
    }
}
