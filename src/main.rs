use anyhow::Result;
use clap::Parser;
use icon_placeholders::placeholder::{generate_placeholders, GeneratorOptions};

#[derive(Debug, Parser)]
#[clap(
    name = "icon-placeholders",
    version,
    about = "Write placeholder icon files (icon16.png, icon48.png, icon128.png) into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    generate_placeholders(&GeneratorOptions::default())?;

    println!("Icon placeholder files created");
    Ok(())
}
