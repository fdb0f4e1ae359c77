use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lcd_exp::{load_parameter_list, run_batch, OutputLayout, RecordStatus};

use super::PolicyArgs;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Parameter list with one `n, k, d` record per line.
    #[arg(long)]
    pub list: PathBuf,
    #[command(flatten)]
    pub policy: PolicyArgs,
    /// Root directory; each run gets a timestamped subdirectory.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &BatchArgs) -> Result<(), Box<dyn Error>> {
    let records = load_parameter_list(&args.list)?;
    let policy = args.policy.resolve()?;
    let layout = OutputLayout::new(&args.out);
    let report = run_batch(&records, &policy, &layout)?;
    let found = report
        .records
        .iter()
        .filter(|record| record.status == RecordStatus::Found)
        .count();
    println!(
        "{found}/{} found; report in {}",
        report.records.len(),
        layout.run_dir().join("batch_report.json").display()
    );
    Ok(())
}
