//! Scenario file types
//!
//! Defines the data structures for deserializing YAML scenarios.

use serde::Deserialize;

use crate::fib::Value;

/// A complete scenario loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct TestScenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario checks
    pub description: Option<String>,
    /// The steps to execute, in order
    pub steps: Vec<TestStep>,
}

/// A single step in a scenario
///
/// Parsed through [`RawStep`] rather than an internally tagged enum: serde
/// buffers tagged content without 128-bit integer support, which would
/// reject expected values above `u64::MAX`.
#[derive(Deserialize, Debug)]
#[serde(try_from = "RawStep")]
pub enum TestStep {
    /// Compute F(index)
    Get { index: i64, expect: Expectation },
    /// Compute F(0)..=F(n)
    Range { n: i64, expect: Expectation },
    /// Take the first `count` values of the lazy sequence
    Take { count: usize, expect: Expectation },
    /// Check F(i) = F(i-1) + F(i-2) for every i in 2..=up_to
    Recurrence { up_to: i64 },
}

/// Step kind, from the `action` key
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum Action {
    Get,
    Range,
    Take,
    Recurrence,
}

/// Step as written in YAML, before checking which keys the action needs
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawStep {
    action: Action,
    index: Option<i64>,
    n: Option<i64>,
    count: Option<usize>,
    up_to: Option<i64>,
    expect: Option<Expectation>,
}

fn required<T>(field: Option<T>, action: &str, key: &str) -> Result<T, String> {
    field.ok_or_else(|| format!("'{}' step requires '{}'", action, key))
}

impl TryFrom<RawStep> for TestStep {
    type Error = String;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let expect = raw.expect.unwrap_or_default();
        Ok(match raw.action {
            Action::Get => TestStep::Get {
                index: required(raw.index, "get", "index")?,
                expect,
            },
            Action::Range => TestStep::Range {
                n: required(raw.n, "range", "n")?,
                expect,
            },
            Action::Take => TestStep::Take {
                count: required(raw.count, "take", "count")?,
                expect,
            },
            Action::Recurrence => TestStep::Recurrence {
                up_to: required(raw.up_to, "recurrence", "up_to")?,
            },
        })
    }
}

/// Expected outcome of a step
///
/// Exactly one of the fields is normally set. `error` holds an error code
/// such as `INVALID_INDEX`.
#[derive(Deserialize, Debug, Default)]
pub struct Expectation {
    /// Expected single value
    pub value: Option<Value>,
    /// Expected sequence of values
    pub values: Option<Vec<Value>>,
    /// Expected length of the sequence
    pub len: Option<usize>,
    /// Expected error code
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let yaml = r#"
name: Basics
steps:
  - action: get
    index: 10
    expect:
      value: 55
  - action: get
    index: -1
    expect:
      error: INVALID_INDEX
  - action: range
    n: 5
    expect:
      values: [0, 1, 1, 2, 3, 5]
  - action: recurrence
    up_to: 40
"#;
        let scenario: TestScenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "Basics");
        assert!(scenario.description.is_none());
        assert_eq!(scenario.steps.len(), 4);

        match &scenario.steps[1] {
            TestStep::Get { index, expect } => {
                assert_eq!(*index, -1);
                assert_eq!(expect.error.as_deref(), Some("INVALID_INDEX"));
            }
            other => panic!("Expected Get step, got {:?}", other),
        }
        assert!(matches!(scenario.steps[3], TestStep::Recurrence { up_to: 40 }));
    }

    #[test]
    fn test_parse_value_above_u64() {
        let yaml = r#"
name: Largest
steps:
  - action: get
    index: 186
    expect:
      value: 332825110087067562321196029789634457848
  - action: range
    n: 94
    expect:
      len: 95
"#;
        let scenario: TestScenario = serde_yaml::from_str(yaml).unwrap();
        match &scenario.steps[0] {
            TestStep::Get { index, expect } => {
                assert_eq!(*index, 186);
                assert_eq!(
                    expect.value,
                    Some(332_825_110_087_067_562_321_196_029_789_634_457_848)
                );
            }
            other => panic!("Expected Get step, got {:?}", other),
        }
    }

    #[test]
    fn test_expect_is_optional() {
        let yaml = "name: Bare\nsteps:\n  - action: take\n    count: 3\n";
        let scenario: TestScenario = serde_yaml::from_str(yaml).unwrap();
        match &scenario.steps[0] {
            TestStep::Take { count, expect } => {
                assert_eq!(*count, 3);
                assert!(expect.value.is_none() && expect.error.is_none());
            }
            other => panic!("Expected Take step, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        let yaml = "name: Bad\nsteps:\n  - action: divide\n";
        assert!(serde_yaml::from_str::<TestScenario>(yaml).is_err());
    }

    #[test]
    fn test_missing_key_rejected() {
        let yaml = "name: Bad\nsteps:\n  - action: get\n";
        let err = serde_yaml::from_str::<TestScenario>(yaml).unwrap_err();
        assert!(err.to_string().contains("requires 'index'"));
    }
}
