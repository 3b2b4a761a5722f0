use clap::Parser;
use skyhawk_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
