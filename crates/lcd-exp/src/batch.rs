use std::fs::{self, File};
use std::path::Path;

use csv::WriterBuilder;
use lcd_core::{CodeParameters, ErrorInfo, LcdError, ValidatorConfig};
use lcd_search::{search, SearchGuarantee, SearchOutcome, SearchStats};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::export::export_code;
use crate::layout::OutputLayout;
use crate::paramlist::ParameterRecord;
use crate::serde::{stable_hash_string, to_canonical_json_bytes};
use crate::timing::Stopwatch;

/// Result of one record in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// A generator matrix was found and exported.
    Found,
    /// The search space was exhausted.
    Exhausted,
}

/// Per-record entry of `batch_report.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecordReport {
    /// Source line in the parameter list.
    pub line: usize,
    /// Target parameters.
    pub parameters: CodeParameters,
    /// Note carried over from the parameter list.
    pub note: Option<String>,
    /// Search result.
    pub status: RecordStatus,
    /// Minimum distance of the found code.
    pub achieved_distance: Option<usize>,
    /// Hermitian LCD flag of the found code.
    pub hermitian_lcd: Option<bool>,
    /// Canonical hash of the found code.
    pub code_hash: Option<String>,
    /// Negative-result guarantee for exhausted records.
    pub guarantee: Option<SearchGuarantee>,
    /// Search counters.
    pub stats: SearchStats,
    /// Wall-clock search time.
    pub elapsed_seconds: f64,
    /// Artefact directory relative to the run directory.
    pub out_dir: Option<String>,
}

/// Aggregate report written as `batch_report.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Run stamp of the output layout.
    pub stamp: String,
    /// Policy shared by every record.
    pub policy: ValidatorConfig,
    /// Hash of the parameter records and policy.
    pub input_hash: String,
    /// One entry per record, in list order.
    pub records: Vec<BatchRecordReport>,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    n: usize,
    k: usize,
    d: usize,
    status: RecordStatus,
    achieved_distance: Option<usize>,
    hermitian_lcd: Option<bool>,
    elapsed_seconds: f64,
    code_hash: Option<&'a str>,
}

/// Searches each record in order, exporting found codes under `layout`.
///
/// Writes `batch_report.json` and `batch_summary.csv` into the run directory.
pub fn run_batch(
    records: &[ParameterRecord],
    policy: &ValidatorConfig,
    layout: &OutputLayout,
) -> Result<BatchReport, LcdError> {
    let run_dir = layout.create_run_dir()?;
    let input_hash = stable_hash_string(&(records, policy))?;
    info!(records = records.len(), dir = %run_dir.display(), "starting batch");

    let mut reports = Vec::with_capacity(records.len());
    for record in records {
        let stopwatch = Stopwatch::start();
        let outcome = search(&record.parameters, policy)?;
        let elapsed_seconds = stopwatch.elapsed_seconds();
        let stats = *outcome.stats();
        let report = match outcome {
            SearchOutcome::Found { code, .. } => {
                let dir = layout.create_entry_dir(&record.parameters, record.line)?;
                export_code(&code, &dir)?;
                let out_dir = dir
                    .strip_prefix(&run_dir)
                    .map(|relative| relative.display().to_string())
                    .unwrap_or_else(|_| dir.display().to_string());
                BatchRecordReport {
                    line: record.line,
                    parameters: record.parameters,
                    note: record.note.clone(),
                    status: RecordStatus::Found,
                    achieved_distance: Some(code.minimum_distance()),
                    hermitian_lcd: Some(code.is_hermitian_lcd()),
                    code_hash: Some(code.provenance().code_hash.clone()),
                    guarantee: None,
                    stats,
                    elapsed_seconds,
                    out_dir: Some(out_dir),
                }
            }
            SearchOutcome::Exhausted(exhaustion) => BatchRecordReport {
                line: record.line,
                parameters: record.parameters,
                note: record.note.clone(),
                status: RecordStatus::Exhausted,
                achieved_distance: None,
                hermitian_lcd: None,
                code_hash: None,
                guarantee: Some(exhaustion.guarantee),
                stats,
                elapsed_seconds,
                out_dir: None,
            },
        };
        info!(
            line = record.line,
            parameters = %record.parameters,
            status = ?report.status,
            elapsed_seconds,
            "record finished"
        );
        reports.push(report);
    }

    let report = BatchReport {
        stamp: layout.stamp().to_string(),
        policy: *policy,
        input_hash,
        records: reports,
    };
    let bytes = to_canonical_json_bytes(&report)?;
    let report_path = run_dir.join("batch_report.json");
    fs::write(&report_path, bytes).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("batch-report-write", err.to_string())
                .with_context("path", report_path.display().to_string()),
        )
    })?;
    write_summary(&run_dir.join("batch_summary.csv"), &report)?;
    Ok(report)
}

fn wrap_csv(path: &Path, err: csv::Error) -> LcdError {
    LcdError::Io(
        ErrorInfo::new("batch-summary-write", "failed to write CSV summary")
            .with_context("path", path.display().to_string())
            .with_hint(err.to_string()),
    )
}

fn write_summary(path: &Path, report: &BatchReport) -> Result<(), LcdError> {
    let file = File::create(path).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("batch-summary-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);
    for record in &report.records {
        writer
            .serialize(SummaryRow {
                n: record.parameters.n(),
                k: record.parameters.k(),
                d: record.parameters.d(),
                status: record.status,
                achieved_distance: record.achieved_distance,
                hermitian_lcd: record.hermitian_lcd,
                elapsed_seconds: record.elapsed_seconds,
                code_hash: record.code_hash.as_deref(),
            })
            .map_err(|err| wrap_csv(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| wrap_csv(path, csv::Error::from(err)))
}
