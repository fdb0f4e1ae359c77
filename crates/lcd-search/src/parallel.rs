use std::sync::atomic::AtomicBool;

use lcd_code::Vector;
use lcd_core::{ErrorInfo, LcdError};
use rayon::prelude::*;
use tracing::debug;

use crate::engine::{Partition, Worker, WorkerEnd};
use crate::outcome::SearchStats;
use crate::plan::SearchPlan;

/// Runs one worker per pool thread, each owning a round-robin share of the
/// first-row candidates.
///
/// The only shared state is the cancellation flag; the first worker to raise
/// it owns the result and the others stop at their next iteration.
pub(crate) fn run_workers(
    plan: &SearchPlan,
) -> Result<(Option<Vec<Vector>>, SearchStats), LcdError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(plan.policy().threads)
        .build()
        .map_err(|err| {
            LcdError::Search(
                plan.policy()
                    .annotate(ErrorInfo::new("thread-pool", err.to_string()))
                    .with_context("threads", plan.policy().threads.to_string()),
            )
        })?;
    let workers = pool.current_num_threads().max(1);
    let ends = pool.install(|| run_partitions(plan, workers));

    let mut stats = SearchStats::default();
    let mut found = None;
    for (end, worker_stats) in ends {
        stats += worker_stats;
        if let WorkerEnd::Found(rows) = end {
            found = Some(rows);
        }
    }
    Ok((found, stats))
}

/// Runs `workers` partitions on the current rayon pool sharing one cancel flag.
fn run_partitions(plan: &SearchPlan, workers: usize) -> Vec<(WorkerEnd, SearchStats)> {
    let cancel = AtomicBool::new(false);
    (0..workers)
        .into_par_iter()
        .map(|index| {
            let mut worker = Worker::new(
                plan,
                Partition {
                    index,
                    count: workers,
                },
            );
            let end = worker.run(Some(&cancel));
            debug!(worker = index, ?end, stats = ?worker.stats(), "worker finished");
            (end, worker.stats())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use lcd_core::{CodeParameters, ValidatorConfig};

    use super::*;

    #[test]
    fn exactly_one_worker_publishes_rows() {
        // Every nonzero row reaches d = 1, so each partition holds a match.
        let plan = SearchPlan::new(
            CodeParameters::new(3, 1, 1, 4).unwrap(),
            ValidatorConfig::default(),
        );
        let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
        for _ in 0..20 {
            let ends = pool.install(|| run_partitions(&plan, 16));
            let found = ends
                .iter()
                .filter(|(end, _)| matches!(end, WorkerEnd::Found(_)))
                .count();
            assert_eq!(found, 1);
            assert!(ends
                .iter()
                .all(|(end, _)| !matches!(end, WorkerEnd::Exhausted)));
        }
    }
}
