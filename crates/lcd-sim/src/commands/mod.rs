pub mod batch;
pub mod search;
pub mod verify;
pub mod version;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lcd_core::ValidatorConfig;
use lcd_search::load_policy;

/// Policy flags shared by `search` and `batch`.
#[derive(Args, Debug, Clone)]
pub struct PolicyArgs {
    /// YAML policy file; flags below are added on top of it.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Fix the leading k columns to the identity.
    #[arg(long)]
    pub identity: bool,
    /// Break scalar and row-order symmetry during enumeration.
    #[arg(long)]
    pub restrict: bool,
    /// Require a Hermitian LCD code.
    #[arg(long)]
    pub lcd: bool,
    /// Split first-row candidates across worker threads.
    #[arg(long)]
    pub parallel: bool,
    /// Worker thread count (0 picks the rayon default).
    #[arg(long)]
    pub threads: Option<usize>,
}

impl PolicyArgs {
    pub fn resolve(&self) -> Result<ValidatorConfig, Box<dyn Error>> {
        let base = match &self.policy {
            Some(path) => load_policy(path)?,
            None => ValidatorConfig::default(),
        };
        Ok(ValidatorConfig {
            append_identity: base.append_identity || self.identity,
            restrict_generation: base.restrict_generation || self.restrict,
            require_hermitian_lcd: base.require_hermitian_lcd || self.lcd,
            multithreaded: base.multithreaded || self.parallel,
            threads: self.threads.unwrap_or(base.threads),
        })
    }
}
