#![deny(missing_docs)]
#![doc = "Depth-first search for generator matrices of GF(4) codes with a target minimum distance, optionally Hermitian LCD."]

/// YAML policy loading.
pub mod config;
/// Backtracking state machine and the public `search` entry point.
pub mod engine;
/// Outcome, statistics and exhaustion descriptors.
pub mod outcome;
/// Parallel worker pool over partitioned first-row candidates.
pub mod parallel;
/// Per-depth enumeration plan derived from parameters and policy.
pub mod plan;
/// Sound pruning rules applied before descending.
pub mod prune;

pub use config::{load_policy, policy_from_yaml};
pub use engine::{search, SearchEngine};
pub use outcome::{Exhaustion, SearchGuarantee, SearchOutcome, SearchStats};
pub use plan::SearchPlan;
