use std::fs;

use lcd_core::ValidatorConfig;
use lcd_exp::{load_code, parse_parameter_list, run_batch, OutputLayout, RecordStatus};
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn batch_exports_found_codes_and_reports_exhaustion() {
    let dir = tempdir().unwrap();
    let layout = OutputLayout::with_stamp(dir.path(), "20260101-000000");
    let records = parse_parameter_list("3, 1, 3\n// skipped\n4, 2, 3\n4, 2, 4/impossible\n").unwrap();

    let report = run_batch(&records, &ValidatorConfig::default(), &layout).unwrap();
    let statuses: Vec<RecordStatus> = report.records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![RecordStatus::Found, RecordStatus::Found, RecordStatus::Exhausted]
    );
    assert_eq!(report.records[0].achieved_distance, Some(3));
    assert_eq!(report.records[1].out_dir.as_deref(), Some("n4_k2_d3_line3"));
    assert_eq!(report.records[2].note.as_deref(), Some("impossible"));

    let run_dir = dir.path().join("20260101-000000");
    let code = load_code(&run_dir.join("n4_k2_d3_line3").join("code.bin")).unwrap();
    assert_eq!(code.achieved(), (4, 2, 3));
    assert_eq!(
        report.records[1].code_hash.as_deref(),
        Some(code.canonical_hash().as_str())
    );
    assert!(!run_dir.join("n4_k2_d4_line4").exists());

    let json: Value =
        serde_json::from_slice(&fs::read(run_dir.join("batch_report.json")).unwrap()).unwrap();
    assert_eq!(json["records"][2]["status"], "exhausted");
    assert_eq!(json["records"][2]["guarantee"], "exhaustive");
    assert_eq!(json["stamp"], "20260101-000000");

    let csv = fs::read_to_string(run_dir.join("batch_summary.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("n,k,d,status"));
    assert!(lines[3].starts_with("4,2,4,exhausted"));
}

#[test]
fn lcd_batch_marks_hermitian_flag() {
    let dir = tempdir().unwrap();
    let layout = OutputLayout::with_stamp(dir.path(), "run");
    let records = parse_parameter_list("5, 2, 3\n4, 2, 3\n").unwrap();
    let policy = ValidatorConfig {
        append_identity: true,
        restrict_generation: true,
        require_hermitian_lcd: true,
        ..ValidatorConfig::default()
    };
    let report = run_batch(&records, &policy, &layout).unwrap();
    assert_eq!(report.records[0].hermitian_lcd, Some(true));
    assert_eq!(report.records[1].status, RecordStatus::Exhausted);
    assert!(report.records.iter().all(|r| r.elapsed_seconds >= 0.0));
    assert_eq!(report.input_hash.len(), 64);
}

#[test]
fn repeated_parameters_keep_separate_artefacts() {
    let dir = tempdir().unwrap();
    let layout = OutputLayout::with_stamp(dir.path(), "run");
    let records = parse_parameter_list("3, 1, 3/first\n3, 1, 3/second\n").unwrap();
    let report = run_batch(&records, &ValidatorConfig::default(), &layout).unwrap();
    let dirs: Vec<Option<&str>> = report.records.iter().map(|r| r.out_dir.as_deref()).collect();
    assert_eq!(dirs, vec![Some("n3_k1_d3_line1"), Some("n3_k1_d3_line2")]);
    for name in ["n3_k1_d3_line1", "n3_k1_d3_line2"] {
        assert!(dir.path().join("run").join(name).join("code.bin").exists());
    }
}

#[test]
fn layout_names_record_directories() {
    let layout = OutputLayout::new("/tmp/out");
    assert_eq!(layout.stamp().len(), "20260101-000000".len());
    let params = lcd_core::CodeParameters::new(6, 3, 4, 4).unwrap();
    assert!(layout.record_dir(&params).ends_with("n6_k3_d4"));
    assert!(layout.entry_dir(&params, 7).ends_with("n6_k3_d4_line7"));
}
