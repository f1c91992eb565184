//! CLI command handling
//!
//! Runs CLI commands against the library and formats output.

use serde::Serialize;

use crate::commands::Commands;
use crate::common::config::{Config, OutputFormat};
use crate::common::{paths, Error, Result};
use crate::fib::{self, Value};
use crate::testing;

/// Result of `get`
#[derive(Debug, Serialize)]
pub struct ValueResult {
    pub index: i64,
    pub value: Value,
}

/// Result of `range`
#[derive(Debug, Serialize)]
pub struct RangeResult {
    pub n: i64,
    pub values: Vec<Value>,
}

/// Result of `take`
#[derive(Debug, Serialize)]
pub struct TakeResult {
    /// Count asked for on the command line
    pub requested: usize,
    /// Number of values actually produced
    pub count: usize,
    pub values: Vec<Value>,
}

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config: &Config, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Get { index } => {
            config.limits.check(index)?;
            let value = fib::fibonacci(index)?;

            match format {
                OutputFormat::Json => print_json(&ValueResult { index, value })?,
                OutputFormat::Text => println!("{}", value),
            }
            Ok(())
        }

        Commands::Range { n } => {
            config.limits.check(n)?;
            let values = fib::fibonacci_range(n)?;

            match format {
                OutputFormat::Json => print_json(&RangeResult { n, values })?,
                OutputFormat::Text => print_lines(&values),
            }
            Ok(())
        }

        Commands::Take { count } => {
            let max = config.limits.effective_max_index() as usize;
            if count > max + 1 {
                tracing::warn!(count, max, "Sequence ends before the requested count");
            }
            let values: Vec<Value> = fib::take(count.min(max + 1));

            match format {
                OutputFormat::Json => print_json(&TakeResult {
                    requested: count,
                    count: values.len(),
                    values,
                })?,
                OutputFormat::Text => print_lines(&values),
            }
            Ok(())
        }

        Commands::Verify { scenarios, verbose } => {
            let mut failed = 0;
            for path in &scenarios {
                match testing::run_scenario(path, verbose) {
                    Ok(result) if result.passed => {}
                    Ok(_) => failed += 1,
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "Scenario did not load");
                        eprintln!("Error: {}: {}", path.display(), e);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                return Err(Error::TestAssertion(format!(
                    "{} of {} scenario(s) failed",
                    failed,
                    scenarios.len()
                )));
            }
            Ok(())
        }

        Commands::Config => {
            match paths::config_path() {
                Some(path) if path.exists() => println!("Config file: {}", path.display()),
                Some(path) => println!("Config file: {} (not present, using defaults)", path.display()),
                None => println!("Config file: unavailable on this platform"),
            }
            let format_name = match config.output.format {
                OutputFormat::Text => "text",
                OutputFormat::Json => "json",
            };
            println!("output.format = {}", format_name);
            println!("limits.max_index = {}", config.limits.effective_max_index());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn print_lines(values: &[Value]) {
    for value in values {
        println!("{}", value);
    }
}
