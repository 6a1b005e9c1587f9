use anyhow::Result;
use clap::Parser;
use scholar_coauthors::coauthors;

#[derive(Parser)]
#[command(name = "scholar-coauthors")]
#[command(about = "Fetch a researcher's recent coauthors and write an NSF-style report")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    gather: coauthors::GatherArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    coauthors::run(cli.gather)?;
    Ok(())
}
