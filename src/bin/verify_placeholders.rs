use anyhow::{Context, Result};
use clap::Parser;
use icon_placeholders::verify::verify_directory;
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "verify-placeholders",
    version,
    about = "Check whether placeholder icons have been replaced with real PNGs"
)]
struct Args {
    /// Directory containing the icon files.
    #[clap(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Print the report as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let report = verify_directory(&args.dir)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize verify report")?;
        println!("{json}");
    } else {
        for icon in &report.icons {
            println!("{}: {}", icon.file_name, icon.status);
        }
    }

    if report.is_healthy() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
