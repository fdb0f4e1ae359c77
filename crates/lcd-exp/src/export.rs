use std::fs;
use std::path::{Path, PathBuf};

use lcd_code::Code;
use lcd_core::{ErrorInfo, LcdError};
use serde::Serialize;
use tracing::debug;

use crate::latex::render_latex;
use crate::matlab::render_matlab;

/// Paths written by [`export_code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFiles {
    /// bincode blob.
    pub binary: PathBuf,
    /// Pretty JSON document.
    pub json: PathBuf,
    /// LaTeX fragment.
    pub latex: PathBuf,
    /// Matlab script.
    pub matlab: PathBuf,
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), LcdError> {
    fs::write(path, contents).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("export-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Writes the binary encoding of `code` to `path`.
pub fn write_binary(code: &Code, path: &Path) -> Result<(), LcdError> {
    write_file(path, lcd_code::to_bytes(code)?)
}

/// Writes the JSON encoding of `code` to `path`.
pub fn write_json(code: &Code, path: &Path) -> Result<(), LcdError> {
    write_file(path, lcd_code::to_json(code)?)
}

/// Reads a code written by [`write_binary`] or, for `.json` paths, [`write_json`].
pub fn load_code(path: &Path) -> Result<Code, LcdError> {
    let bytes = fs::read(path).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("code-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
        let text = String::from_utf8(bytes).map_err(|err| {
            LcdError::Serde(
                ErrorInfo::new("json-utf8", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        lcd_code::from_json(&text)
    } else {
        lcd_code::from_bytes(&bytes)
    }
}

/// Writes every artefact for `code` into `dir`.
pub fn export_code(code: &Code, dir: &Path) -> Result<ExportedFiles, LcdError> {
    let files = ExportedFiles {
        binary: dir.join("code.bin"),
        json: dir.join("code.json"),
        latex: dir.join("code.tex"),
        matlab: dir.join("code.m"),
    };
    write_binary(code, &files.binary)?;
    write_json(code, &files.json)?;
    write_file(&files.latex, render_latex(code))?;
    write_file(&files.matlab, render_matlab(code))?;
    debug!(dir = %dir.display(), "exported code artefacts");
    Ok(files)
}
