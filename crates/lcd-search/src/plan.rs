use lcd_code::{RowEnumerator, RowFilter, Vector};
use lcd_core::{CodeParameters, ValidatorConfig};

use crate::outcome::SearchGuarantee;

/// How candidate rows are produced at each depth.
///
/// In identity mode only the trailing `n - k` positions are enumerated; row
/// `i` gets digit 1 in display column `i` and zeros in the other leading
/// `k` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    parameters: CodeParameters,
    policy: ValidatorConfig,
}

impl SearchPlan {
    /// Combines validated parameters with a policy.
    pub fn new(parameters: CodeParameters, policy: ValidatorConfig) -> Self {
        Self { parameters, policy }
    }

    /// Target parameters.
    pub fn parameters(&self) -> &CodeParameters {
        &self.parameters
    }

    /// Active policy.
    pub fn policy(&self) -> &ValidatorConfig {
        &self.policy
    }

    /// Number of enumerated positions per row.
    pub fn free_len(&self) -> usize {
        if self.policy.append_identity {
            self.parameters.n() - self.parameters.k()
        } else {
            self.parameters.n()
        }
    }

    /// Row filter used at `depth`.
    pub fn filter(&self, depth: usize) -> RowFilter {
        match (self.policy.append_identity, self.policy.restrict_generation) {
            (_, false) => RowFilter::All,
            (true, true) if depth == 0 => RowFilter::BinaryDigits,
            (true, true) => RowFilter::All,
            (false, true) => RowFilter::Normalized,
        }
    }

    /// Fresh enumerator for `depth`, given the free part of the row accepted
    /// at the previous depth.
    ///
    /// With restricted free-mode generation rows are strictly ascending, so a
    /// deeper level starts after its parent row.
    pub fn enumerator(&self, depth: usize, parent: Option<Vector>) -> RowEnumerator {
        let rows = RowEnumerator::new(self.free_len(), self.parameters.base(), self.filter(depth));
        match parent {
            Some(previous)
                if self.policy.restrict_generation && !self.policy.append_identity =>
            {
                rows.resume_after(previous)
            }
            _ => rows,
        }
    }

    /// Full row placed at `depth` for the enumerated free part.
    pub fn full_row(&self, depth: usize, free: Vector) -> Vector {
        if self.policy.append_identity {
            let identity = Vector::unit(self.parameters.n() - 1 - depth);
            Vector::from_raw(free.as_raw() | identity.as_raw())
        } else {
            free
        }
    }

    /// What an exhausted run under this plan proves.
    pub fn guarantee(&self) -> SearchGuarantee {
        if self.policy.append_identity {
            SearchGuarantee::UpToEquivalence
        } else {
            SearchGuarantee::Exhaustive
        }
    }
}
