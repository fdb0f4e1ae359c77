//! Experiment utilities around the LCD search: parameter lists, artefact
//! exporters, timestamped output directories and batch runs.

mod batch;
mod export;
mod latex;
mod layout;
mod matlab;
mod paramlist;
mod serde;
mod timing;

pub use batch::{run_batch, BatchRecordReport, BatchReport, RecordStatus};
pub use export::{export_code, load_code, write_binary, write_json, ExportedFiles};
pub use latex::{render_latex, symbol};
pub use layout::OutputLayout;
pub use matlab::render_matlab;
pub use paramlist::{load_parameter_list, parse_parameter_list, ParameterRecord};
pub use self::serde::{stable_hash_string, to_canonical_json_bytes};
pub use timing::Stopwatch;
