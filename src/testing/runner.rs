//! Scenario runner implementation
//!
//! Executes scenario steps directly against the library and compares the
//! structured results with the expectations from the YAML file.

use std::path::Path;

use colored::Colorize;

use crate::common::{Error, Result};
use crate::fib::{self, FibonacciCache, Value};

use super::config::{Expectation, TestScenario, TestStep};

/// Result of a scenario run
#[derive(Debug)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub error: Option<String>,
}

/// Run a scenario from a YAML file
pub fn run_scenario(path: &Path, verbose: bool) -> Result<TestResult> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let scenario: TestScenario = serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse scenario: {}", e)))?;

    Ok(execute(&scenario, verbose))
}

/// Execute an already-parsed scenario, printing progress to stdout
pub fn execute(scenario: &TestScenario, verbose: bool) -> TestResult {
    let steps_total = scenario.steps.len();

    println!(
        "\n{} {}",
        "Running Scenario:".blue().bold(),
        scenario.name.white().bold()
    );
    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    let mut steps_run = 0;
    for (i, step) in scenario.steps.iter().enumerate() {
        let label = describe(step);
        if verbose {
            println!("  {} {}", format!("[{}/{}]", i + 1, steps_total).dimmed(), label);
        }

        steps_run += 1;
        if let Err(e) = run_step(step) {
            println!("  {} {}", "✗".red(), label);
            println!("    {}", e.to_string().red());
            println!(
                "\n{} {}",
                "FAILED".red().bold(),
                format!("({}/{} steps)", steps_run, steps_total).dimmed()
            );
            return TestResult {
                name: scenario.name.clone(),
                passed: false,
                steps_run,
                steps_total,
                error: Some(e.to_string()),
            };
        }
        println!("  {} {}", "✓".green(), label);
    }

    println!(
        "\n{} {}",
        "PASSED".green().bold(),
        format!("({}/{} steps)", steps_run, steps_total).dimmed()
    );

    TestResult {
        name: scenario.name.clone(),
        passed: true,
        steps_run,
        steps_total,
        error: None,
    }
}

fn describe(step: &TestStep) -> String {
    match step {
        TestStep::Get { index, .. } => format!("get {}", index),
        TestStep::Range { n, .. } => format!("range {}", n),
        TestStep::Take { count, .. } => format!("take {}", count),
        TestStep::Recurrence { up_to } => format!("recurrence up to {}", up_to),
    }
}

fn run_step(step: &TestStep) -> Result<()> {
    match step {
        TestStep::Get { index, expect } => {
            let outcome = fib::fibonacci(*index).map(|v| vec![v]);
            check(outcome, expect)
        }
        TestStep::Range { n, expect } => check(fib::fibonacci_range(*n), expect),
        TestStep::Take { count, expect } => check(Ok(fib::take(*count)), expect),
        TestStep::Recurrence { up_to } => {
            let mut cache = FibonacciCache::new();
            if cache.get(0)? != 0 || cache.get(1)? != 1 {
                return Err(Error::TestAssertion("base entries are not 0 and 1".into()));
            }
            for i in 2..=*up_to {
                let (a, b, c) = (cache.get(i - 2)?, cache.get(i - 1)?, cache.get(i)?);
                if a + b != c {
                    return Err(Error::TestAssertion(format!(
                        "F({i}) = {c}, but F({}) + F({}) = {}",
                        i - 1,
                        i - 2,
                        a + b
                    )));
                }
            }
            Ok(())
        }
    }
}

/// Compare a step outcome with its expectation
fn check(outcome: Result<Vec<Value>>, expect: &Expectation) -> Result<()> {
    match (outcome, &expect.error) {
        (Err(e), Some(code)) => {
            if e.code() != code.as_str() {
                return Err(Error::TestAssertion(format!(
                    "Expected error {}, got {} ({})",
                    code,
                    e.code(),
                    e
                )));
            }
            Ok(())
        }
        (Err(e), None) => Err(Error::TestAssertion(format!("Unexpected error: {}", e))),
        (Ok(values), Some(code)) => Err(Error::TestAssertion(format!(
            "Expected error {}, got {} value(s)",
            code,
            values.len()
        ))),
        (Ok(values), None) => {
            if let Some(expected) = expect.value {
                let last = values.last().copied();
                if last != Some(expected) {
                    return Err(Error::TestAssertion(format!(
                        "Expected value {}, got {}",
                        expected,
                        last.map_or_else(|| "nothing".to_string(), |v| v.to_string())
                    )));
                }
            }
            if let Some(expected) = &expect.values {
                if &values != expected {
                    return Err(Error::TestAssertion(format!(
                        "Expected values {:?}, got {:?}",
                        expected, values
                    )));
                }
            }
            if let Some(len) = expect.len {
                if values.len() != len {
                    return Err(Error::TestAssertion(format!(
                        "Expected {} value(s), got {}",
                        len,
                        values.len()
                    )));
                }
            }
            Ok(())
        }
    }
}
