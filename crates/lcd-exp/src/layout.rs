use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use lcd_core::{CodeParameters, ErrorInfo, LcdError};

/// `<root>/<UTC YYYYmmdd-HHMMSS>/n{n}_k{k}_d{d}/` directory scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    stamp: String,
}

impl OutputLayout {
    /// Layout stamped with the current UTC time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_stamp(root, Utc::now().format("%Y%m%d-%H%M%S").to_string())
    }

    /// Layout with an explicit run stamp.
    pub fn with_stamp(root: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            stamp: stamp.into(),
        }
    }

    /// Run stamp.
    pub fn stamp(&self) -> &str {
        &self.stamp
    }

    /// Directory shared by every record of the run.
    pub fn run_dir(&self) -> PathBuf {
        self.root.join(&self.stamp)
    }

    /// Directory for one parameter set.
    pub fn record_dir(&self, parameters: &CodeParameters) -> PathBuf {
        self.run_dir().join(format!(
            "n{}_k{}_d{}",
            parameters.n(),
            parameters.k(),
            parameters.d()
        ))
    }

    /// Directory for the parameter-list record at `line`.
    ///
    /// The line suffix keeps repeated parameter sets apart.
    pub fn entry_dir(&self, parameters: &CodeParameters, line: usize) -> PathBuf {
        let mut dir = self.record_dir(parameters).into_os_string();
        dir.push(format!("_line{line}"));
        PathBuf::from(dir)
    }

    /// Creates the run directory.
    pub fn create_run_dir(&self) -> Result<PathBuf, LcdError> {
        let dir = self.run_dir();
        create_dir(&dir)?;
        Ok(dir)
    }

    /// Creates the directory for `parameters`.
    pub fn create_record_dir(&self, parameters: &CodeParameters) -> Result<PathBuf, LcdError> {
        let dir = self.record_dir(parameters);
        create_dir(&dir)?;
        Ok(dir)
    }

    /// Creates the directory for the parameter-list record at `line`.
    pub fn create_entry_dir(
        &self,
        parameters: &CodeParameters,
        line: usize,
    ) -> Result<PathBuf, LcdError> {
        let dir = self.entry_dir(parameters, line);
        create_dir(&dir)?;
        Ok(dir)
    }
}

fn create_dir(dir: &Path) -> Result<(), LcdError> {
    fs::create_dir_all(dir).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("output-dir", "failed to create output directory")
                .with_context("path", dir.display().to_string())
                .with_hint(err.to_string()),
        )
    })
}
