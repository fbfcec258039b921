use clap::Parser;

fn main() -> anyhow::Result<()> {
    stockdesk_cli::telemetry::init();

    let cli = stockdesk_cli::Cli::parse();
    let output = stockdesk_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
