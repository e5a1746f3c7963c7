use clap::{ArgAction, Parser};
use log::LevelFilter;

use leicht::Simplifier;

/// Simplify numbers, percentages, and dates in a text
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input sentence to simplify
    sentence: String,

    /// Log passes to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .try_init()
        .map_err(|err| format!("initializing logger: {err}"))?;

    let simplifier = Simplifier::new().map_err(|err| format!("building rules: {err}"))?;
    log::info!("loaded {} passes", simplifier.passes().len());

    let simplified = simplifier
        .simplify(&args.sentence)
        .map_err(|err| format!("simplifying text: {err}"))?;

    println!("Simplified Text: {simplified}");

    Ok(())
}
