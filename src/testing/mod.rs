//! Scenario verifier
//!
//! Reads YAML scenarios describing Fibonacci requests and their expected
//! values or errors, and checks them against the library.

mod config;
mod runner;

pub use config::*;
pub use runner::{execute, run_scenario, TestResult};
