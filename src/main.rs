use clap::Parser;
use cucumber_report::cli::commands::cmd_parse;
use cucumber_report::cli::config::{Cli, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;
    let config = load_config(cli.config.as_deref());

    if let Err(e) = cmd_parse(&cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if debug { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CUCUMBER_REPORT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {}", e))?;

    Ok(())
}
