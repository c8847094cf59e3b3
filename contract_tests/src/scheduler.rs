//! Scheduler contract tests
//!
//! Every policy in `PolicyKind::ALL` must:
//! - return `None` from `pick` only when its pool is empty
//! - hand back exactly the processes inserted, each once
//! - keep `len` in step with inserts and picks
//! - never ask to preempt with an empty pool
//! - break ties between equal keys in insertion order
//! - forget every waiting process on `clear`
