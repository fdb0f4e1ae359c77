use std::ops::AddAssign;

use lcd_code::Code;
use lcd_core::{CodeParameters, ValidatorConfig};
use serde::{Deserialize, Serialize};

/// What an exhausted search rules out.
///
/// Both variants mean that no code with the target parameters (and the LCD
/// property, when required) exists; they differ in which generator matrices
/// were actually visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchGuarantee {
    /// Some basis of every code of the given shape was visited.
    Exhaustive,
    /// Every code was covered up to column permutation and column scaling,
    /// which preserve weights and the Hermitian LCD property.
    UpToEquivalence,
}

/// Counters collected by a search worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidate rows pulled from an enumerator.
    pub candidates: u64,
    /// Candidates rejected as linearly dependent on the partial matrix.
    pub dependent: u64,
    /// Candidates rejected because a partial codeword was too light.
    pub pruned_distance: u64,
    /// Candidates rejected by the partial Gram rank bound.
    pub pruned_gram: u64,
    /// Complete matrices submitted to the full distance and LCD checks.
    pub full_checks: u64,
    /// Times a depth was exhausted and the search stepped back.
    pub backtracks: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.candidates += other.candidates;
        self.dependent += other.dependent;
        self.pruned_distance += other.pruned_distance;
        self.pruned_gram += other.pruned_gram;
        self.full_checks += other.full_checks;
        self.backtracks += other.backtracks;
    }
}

/// Report for a search that visited its whole space without a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exhaustion {
    /// Target parameters.
    pub parameters: CodeParameters,
    /// Policy the search ran under.
    pub policy: ValidatorConfig,
    /// Merged worker counters.
    pub stats: SearchStats,
    /// Strength of the negative result.
    pub guarantee: SearchGuarantee,
}

/// Result of a search. Exhaustion is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The first accepted generator matrix.
    Found {
        /// Accepted code.
        code: Box<Code>,
        /// Merged worker counters up to the point of acceptance.
        stats: SearchStats,
    },
    /// No matrix satisfied the constraints.
    Exhausted(Exhaustion),
}

impl SearchOutcome {
    /// The found code, if any.
    pub fn code(&self) -> Option<&Code> {
        match self {
            SearchOutcome::Found { code, .. } => Some(code),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    /// Consumes the outcome, returning the found code.
    pub fn into_code(self) -> Option<Code> {
        match self {
            SearchOutcome::Found { code, .. } => Some(*code),
            SearchOutcome::Exhausted(_) => None,
        }
    }

    /// Whether a code was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Counters for the run.
    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } => stats,
            SearchOutcome::Exhausted(exhaustion) => &exhaustion.stats,
        }
    }
}
