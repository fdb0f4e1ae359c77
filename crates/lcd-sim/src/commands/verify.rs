use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lcd_exp::load_code;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Code written by `search --out` (`code.bin` or `code.json`).
    #[arg(long)]
    pub code: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let code = load_code(&args.code)?;
    let verification = code.verify();
    println!("{}", serde_json::to_string_pretty(&verification)?);
    if !verification.is_consistent() {
        return Err(format!("{} failed verification", args.code.display()).into());
    }
    Ok(())
}
