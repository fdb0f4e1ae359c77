use std::fs;
use std::path::Path;

use lcd_core::{CodeParameters, ErrorInfo, LcdError};
use serde::Serialize;

/// One `n, k, d` entry of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Validated parameters over GF(4).
    pub parameters: CodeParameters,
    /// Text after a `/` following the `d` field, if any.
    pub note: Option<String>,
}

fn malformed(line: usize, text: &str, message: &str) -> LcdError {
    LcdError::Io(
        ErrorInfo::new("param-line-malformed", message)
            .with_context("line", line.to_string())
            .with_context("text", text)
            .with_hint("expected `n, k, d` optionally followed by `/note`"),
    )
}

fn at_line(err: LcdError, line: usize) -> LcdError {
    let line = line.to_string();
    match err {
        LcdError::Parameters(info) => LcdError::Parameters(info.with_context("line", line)),
        LcdError::Overflow(info) => LcdError::Overflow(info.with_context("line", line)),
        LcdError::Field(info) => LcdError::Field(info.with_context("line", line)),
        other => other,
    }
}

fn parse_record(line: usize, text: &str) -> Result<ParameterRecord, LcdError> {
    let (fields, note) = match text.split_once('/') {
        Some((fields, note)) => {
            let note = note.trim();
            (fields, (!note.is_empty()).then(|| note.to_string()))
        }
        None => (text, None),
    };
    let values = fields
        .split(',')
        .map(|field| field.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| malformed(line, text, &err.to_string()))?;
    let &[n, k, d] = values.as_slice() else {
        return Err(malformed(line, text, "expected exactly three fields"));
    };
    let parameters = CodeParameters::new(n, k, d, 4).map_err(|err| at_line(err, line))?;
    Ok(ParameterRecord {
        line,
        parameters,
        note,
    })
}

/// Parses a parameter list: one `n, k, d` record per line over GF(4).
///
/// Blank lines and lines starting with `//` are skipped. The first bad line
/// aborts the whole load.
pub fn parse_parameter_list(text: &str) -> Result<Vec<ParameterRecord>, LcdError> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                None
            } else {
                Some(parse_record(index + 1, trimmed))
            }
        })
        .collect()
}

/// Reads and parses a parameter list file.
pub fn load_parameter_list(path: &Path) -> Result<Vec<ParameterRecord>, LcdError> {
    let text = fs::read_to_string(path).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("param-list-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    parse_parameter_list(&text)
}
