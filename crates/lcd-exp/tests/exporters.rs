use lcd_code::{Code, GeneratorMatrix};
use lcd_core::{Base, CodeParameters, RunProvenance};
use lcd_exp::{export_code, load_code, render_latex, render_matlab};
use tempfile::tempdir;

fn code(n: usize, d: usize, rows: &[Vec<u8>]) -> Code {
    let generator = GeneratorMatrix::from_digit_rows(Base::Quaternary, rows).unwrap();
    let params = CodeParameters::new(n, rows.len(), d, 4).unwrap();
    Code::new(params, generator, RunProvenance::default()).unwrap()
}

#[test]
fn latex_uses_omega_symbols() {
    let latex = render_latex(&code(3, 3, &[vec![1, 2, 3]]));
    assert!(latex.contains(r"1 & \omega & \bar{\omega}"));
    assert!(latex.contains("3 & 3 \\\\"));
    assert!(latex.contains("W(x,y) = x^{3} + 3 y^{3}"));
}

#[test]
fn latex_matrix_rows_and_polynomial() {
    let latex = render_latex(&code(4, 2, &[vec![1, 0, 0, 1], vec![0, 1, 0, 1]]));
    assert!(latex.contains("1 & 0 & 0 & 1 \\\\\n0 & 1 & 0 & 1\n\\end{pmatrix}"));
    assert!(latex.contains("W(x,y) = x^{4} + 9 x^{2} y^{2} + 6 x y^{3}"));
}

#[test]
fn matlab_script_rebuilds_gram_product() {
    let script = render_matlab(&code(4, 2, &[vec![1, 0, 0, 1], vec![0, 1, 0, 1]]));
    assert!(script.contains("G = gf([1 0 0 1; 0 1 0 1], 2);"));
    assert!(script.contains("M = (G.^2) * G.';"));
    assert!(script.trim_end().ends_with("rank(M)"));
}

#[test]
fn exported_artefacts_reload() {
    let dir = tempdir().unwrap();
    let original = code(6, 4, &[
        vec![1, 0, 0, 1, 1, 1],
        vec![0, 1, 0, 1, 2, 3],
        vec![0, 0, 1, 1, 3, 2],
    ]);
    let files = export_code(&original, dir.path()).unwrap();
    for path in [&files.binary, &files.json, &files.latex, &files.matlab] {
        assert!(path.exists(), "{} missing", path.display());
    }
    assert_eq!(load_code(&files.binary).unwrap(), original);
    assert_eq!(load_code(&files.json).unwrap(), original);
}

#[test]
fn corrupt_binary_is_serde_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("code.bin");
    std::fs::write(&path, [0xffu8; 3]).unwrap();
    let err = load_code(&path).unwrap_err();
    assert!(matches!(err, lcd_core::LcdError::Serde(_)));
}
