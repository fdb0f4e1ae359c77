use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lcd_core::CodeParameters;
use lcd_exp::{export_code, OutputLayout};
use lcd_search::{SearchEngine, SearchOutcome};
use tracing::info;

use super::PolicyArgs;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Code length.
    #[arg(long)]
    pub n: usize,
    /// Code dimension.
    #[arg(long)]
    pub k: usize,
    /// Target minimum distance.
    #[arg(long)]
    pub d: usize,
    /// Field order (2 or 4).
    #[arg(long, default_value_t = 4)]
    pub base: u32,
    #[command(flatten)]
    pub policy: PolicyArgs,
    /// Root directory for exported artefacts.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let params = CodeParameters::new(args.n, args.k, args.d, args.base)?;
    let policy = args.policy.resolve()?;
    let outcome = SearchEngine::new(params, policy).run()?;
    match outcome {
        SearchOutcome::Found { code, stats } => {
            let (n, k, d) = code.achieved();
            println!("found [{n}, {k}, {d}] code over {}", params.base());
            println!("minimum distance: {}", code.minimum_distance());
            println!("{}", code.generator());
            println!("hermitian lcd: {}", code.is_hermitian_lcd());
            let weights: Vec<String> = code
                .weight_enumerator()
                .nonzero()
                .map(|(weight, count)| format!("A{weight}={count}"))
                .collect();
            println!("weights: {}", weights.join(" "));
            println!("candidates: {}", stats.candidates);
            if let Some(root) = &args.out {
                let dir = OutputLayout::new(root).create_record_dir(&params)?;
                let files = export_code(&code, &dir)?;
                info!(dir = %dir.display(), "artefacts written");
                println!("{}", serde_json::to_string_pretty(&files)?);
            }
        }
        SearchOutcome::Exhausted(exhaustion) => {
            println!(
                "no code with parameters {params} ({:?}); candidates: {}",
                exhaustion.guarantee, exhaustion.stats.candidates
            );
        }
    }
    Ok(())
}
