use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use lcd_code::{is_hermitian_lcd, meets_distance, Code, Echelon, GeneratorMatrix, RowEnumerator, Vector};
use lcd_core::{CodeParameters, ErrorInfo, LcdError, RunProvenance, ValidatorConfig};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::outcome::{Exhaustion, SearchOutcome, SearchStats};
use crate::parallel;
use crate::plan::SearchPlan;
use crate::prune;

/// Share of first-row candidates owned by one worker: those whose enumeration
/// index is congruent to `index` modulo `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Partition {
    pub index: usize,
    pub count: usize,
}

impl Partition {
    pub(crate) const WHOLE: Partition = Partition { index: 0, count: 1 };

    fn owns(&self, ordinal: u64) -> bool {
        ordinal % self.count as u64 == self.index as u64
    }
}

/// How a worker's run ended.
#[derive(Debug)]
pub(crate) enum WorkerEnd {
    /// Accepted rows, in depth order.
    Found(Vec<Vector>),
    /// The worker's share of the space was exhausted.
    Exhausted,
    /// Another worker already won.
    Cancelled,
}

#[derive(Debug)]
struct Frame {
    rows: RowEnumerator,
    ordinal: u64,
}

/// One depth-first traversal over (a partition of) the search space.
///
/// Frame `i` holds the enumerator for row `i`; `rows` holds the accepted full
/// rows for depths below the current one and `echelon` their reduced basis.
pub(crate) struct Worker<'a> {
    plan: &'a SearchPlan,
    partition: Partition,
    frames: Vec<Frame>,
    rows: Vec<Vector>,
    echelon: Echelon,
    stats: SearchStats,
}

impl<'a> Worker<'a> {
    pub(crate) fn new(plan: &'a SearchPlan, partition: Partition) -> Self {
        let k = plan.parameters().k();
        Self {
            plan,
            partition,
            frames: Vec::with_capacity(k),
            rows: Vec::with_capacity(k),
            echelon: Echelon::new(),
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Next candidate at the deepest frame, honouring the partition at depth 0.
    fn next_candidate(&mut self) -> Option<Vector> {
        let depth = self.frames.len() - 1;
        let partition = self.partition;
        let frame = self.frames.last_mut()?;
        loop {
            let free = frame.rows.next()?;
            let ordinal = frame.ordinal;
            frame.ordinal += 1;
            if depth > 0 || partition.owns(ordinal) {
                return Some(free);
            }
        }
    }

    /// Runs until a match, exhaustion, or `cancel` is raised by another worker.
    pub(crate) fn run(&mut self, cancel: Option<&AtomicBool>) -> WorkerEnd {
        let params = *self.plan.parameters();
        let policy = *self.plan.policy();
        let (k, d, base) = (params.k(), params.d(), params.base());

        self.frames.push(Frame {
            rows: self.plan.enumerator(0, None),
            ordinal: 0,
        });

        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Acquire)) {
                return WorkerEnd::Cancelled;
            }
            let depth = self.rows.len();
            let Some(free) = self.next_candidate() else {
                self.frames.pop();
                if depth == 0 {
                    return WorkerEnd::Exhausted;
                }
                self.rows.pop();
                self.echelon.pop();
                self.stats.backtracks += 1;
                continue;
            };
            self.stats.candidates += 1;

            let row = self.plan.full_row(depth, free);
            if !self.echelon.is_independent(row) {
                self.stats.dependent += 1;
                continue;
            }
            if !prune::partial_distance_ok(&self.rows, row, base, d) {
                self.stats.pruned_distance += 1;
                continue;
            }
            if policy.require_hermitian_lcd && !prune::gram_rank_ok(&self.rows, row, k) {
                self.stats.pruned_gram += 1;
                continue;
            }

            self.rows.push(row);
            if depth + 1 == k {
                self.stats.full_checks += 1;
                let accepted = meets_distance(&self.rows, base, d)
                    && (!policy.require_hermitian_lcd || is_hermitian_lcd(&self.rows, params.n()));
                if accepted && claim(cancel) {
                    return WorkerEnd::Found(std::mem::take(&mut self.rows));
                }
                self.rows.pop();
                continue;
            }
            self.echelon.insert(row);
            self.frames.push(Frame {
                rows: self.plan.enumerator(depth + 1, Some(free)),
                ordinal: 0,
            });
        }
    }
}

/// Marks the search as won; only the first caller succeeds.
fn claim(cancel: Option<&AtomicBool>) -> bool {
    match cancel {
        None => true,
        Some(flag) => flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok(),
    }
}

/// Search driver for one parameter set and policy.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    plan: SearchPlan,
}

impl SearchEngine {
    /// Builds an engine for validated parameters.
    pub fn new(parameters: CodeParameters, policy: ValidatorConfig) -> Self {
        Self {
            plan: SearchPlan::new(parameters, policy),
        }
    }

    /// Runs the search sequentially or across the worker pool, per policy.
    pub fn run(&self) -> Result<SearchOutcome, LcdError> {
        let params = *self.plan.parameters();
        let policy = *self.plan.policy();
        info!(
            parameters = %params,
            identity = policy.append_identity,
            restrict = policy.restrict_generation,
            lcd = policy.require_hermitian_lcd,
            parallel = policy.multithreaded,
            "starting search"
        );

        let (found, stats) = if policy.multithreaded {
            parallel::run_workers(&self.plan)?
        } else {
            let mut worker = Worker::new(&self.plan, Partition::WHOLE);
            let end = worker.run(None);
            let found = match end {
                WorkerEnd::Found(rows) => Some(rows),
                WorkerEnd::Exhausted | WorkerEnd::Cancelled => None,
            };
            (found, worker.stats())
        };
        debug!(?stats, "search finished");

        match found {
            Some(rows) => {
                let code = self.build_code(rows)?;
                let (n, k, d) = code.achieved();
                info!(
                    n,
                    k,
                    d,
                    minimum_distance = code.minimum_distance(),
                    lcd = code.is_hermitian_lcd(),
                    "code found"
                );
                Ok(SearchOutcome::Found {
                    code: Box::new(code),
                    stats,
                })
            }
            None => {
                info!(parameters = %params, "search space exhausted");
                Ok(SearchOutcome::Exhausted(Exhaustion {
                    parameters: params,
                    policy,
                    stats,
                    guarantee: self.plan.guarantee(),
                }))
            }
        }
    }

    fn build_code(&self, rows: Vec<Vector>) -> Result<Code, LcdError> {
        let params = *self.plan.parameters();
        let generator = GeneratorMatrix::new(params.n(), params.base(), rows)
            .map_err(|err| LcdError::Search(params.annotate(err.info().clone())))?;
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        let provenance = RunProvenance {
            input_hash: input_hash(&params, self.plan.policy())?,
            code_hash: String::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
            tool_versions,
        };
        Code::new(params, generator, provenance)
    }
}

/// SHA-256 over the JSON encoding of the parameters and policy.
pub fn input_hash(params: &CodeParameters, policy: &ValidatorConfig) -> Result<String, LcdError> {
    let bytes = serde_json::to_vec(&(params, policy))
        .map_err(|err| LcdError::Serde(ErrorInfo::new("input-hash", err.to_string())))?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

/// Searches for a generator matrix meeting `params` under `policy`.
pub fn search(params: &CodeParameters, policy: &ValidatorConfig) -> Result<SearchOutcome, LcdError> {
    SearchEngine::new(*params, *policy).run()
}
