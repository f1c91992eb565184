//! CLI command definitions
//!
//! Defines the clap commands for the `fib` CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Fibonacci number at an index
    Get {
        /// Position in the sequence (F(0) = 0, F(1) = 1)
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Print every Fibonacci number from F(0) up to F(N)
    Range {
        /// Last index to include
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Print the first COUNT numbers of the sequence
    Take {
        /// How many numbers to print
        count: usize,
    },

    /// Run YAML scenario files and report pass/fail
    Verify {
        /// Scenario files to run
        #[arg(required = true)]
        scenarios: Vec<PathBuf>,

        /// Print each step as it runs
        #[arg(long, short)]
        verbose: bool,
    },

    /// Show the configuration file location and effective settings
    Config,
}
