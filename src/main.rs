//! `fib` - memoized Fibonacci numbers from the command line

use clap::Parser;
use fibonacci::common::config::{Config, OutputFormat};
use fibonacci::common::{logging, ErrorReport};
use fibonacci::{cli, commands::Commands};

#[derive(Parser)]
#[command(name = "fib", about = "Memoized Fibonacci calculator")]
#[command(version, long_about = None)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    let (result, format) = match Config::load() {
        Ok(config) => {
            let format = cli.format.unwrap_or(config.output.format);
            (cli::dispatch(cli.command, &config, format), format)
        }
        Err(e) => (Err(e), cli.format.unwrap_or_default()),
    };

    if let Err(e) = result {
        // JSON consumers read stdout only
        if format == OutputFormat::Json {
            if let Ok(json) = serde_json::to_string(&ErrorReport::from(&e)) {
                println!("{json}");
            }
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
