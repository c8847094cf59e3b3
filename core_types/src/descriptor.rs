//! Process descriptors (simulation input records)

use crate::Tick;
use serde::{Deserialize, Serialize};

/// Immutable description of one process to simulate
///
/// `input_index` is the position of the record in the input file. It is
/// used to break ties between simultaneous arrivals and to map results back
/// to the user-facing process numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Tick at which the process becomes known to the system
    pub creation_time: Tick,
    /// Ticks of CPU the process needs to finish
    pub duration: Tick,
    /// Scheduling priority (larger is more urgent)
    pub priority: i32,
    /// Position in the input file
    pub input_index: usize,
}

impl ProcessDescriptor {
    /// Creates a new process descriptor
    pub fn new(creation_time: Tick, duration: Tick, priority: i32, input_index: usize) -> Self {
        Self {
            creation_time,
            duration,
            priority,
            input_index,
        }
    }

    /// Key used to order the creation schedule
    ///
    /// Arrivals at the same tick keep their input order.
    pub fn admission_key(&self) -> (Tick, usize) {
        (self.creation_time, self.input_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_creation() {
        let desc = ProcessDescriptor::new(3, 5, 1, 0);
        assert_eq!(desc.creation_time, 3);
        assert_eq!(desc.duration, 5);
        assert_eq!(desc.priority, 1);
        assert_eq!(desc.input_index, 0);
    }

    #[test]
    fn test_admission_key_breaks_ties_by_input_order() {
        let first = ProcessDescriptor::new(2, 4, 0, 1);
        let second = ProcessDescriptor::new(2, 1, 9, 3);
        let earlier = ProcessDescriptor::new(1, 1, 0, 7);

        assert!(first.admission_key() < second.admission_key());
        assert!(earlier.admission_key() < first.admission_key());
    }
}
