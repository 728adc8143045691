use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

/// Generate the scoreboard criteria list for one registry version.
#[derive(Parser)]
#[command(name = "statsgen", about)]
struct Cli {
    /// Registry version to read; expects data/<version>.json.
    version: String,
}

const DATA_DIR: &str = "data";
const OUTPUT_PATH: &str = "data/stats.list";

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match statsgen_criteria::generate(Path::new(DATA_DIR), &cli.version, Path::new(OUTPUT_PATH)) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("statsgen: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
