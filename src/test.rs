//! A test runner for translation tests defined in YAML test files
//!
//! A test file looks like this:
//!
//! ```yaml
//! flags: {testmode: dots}
//! tests:
//!   - [你好, 1345-24 125-235]
//!   - [numbers get one indicator per run, 12a34, 3456-1 12-1 3456-14 145]
//!   - [中, "", {xfail: no reading in the test dictionary}]
//! ```
//!
//! Every `tests` list forms a [`TestSuite`] with the `flags` that precede it.

use std::{fs::File, path::Path};

use crate::{
    braille::{groups_to_dots, groups_to_unicode},
    translator::{Romanizer, Translator},
    yaml::{self, YAMLParser},
};

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("Cannot open test file")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse test file")]
    Parse(#[from] yaml::ParseError),
}

/// How the expected output of a test is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestMode {
    /// Dot numbers, e.g. `1345-24 125-235`
    #[default]
    Dots,
    /// Unicode braille, e.g. `⠝⠊ ⠓⠖`
    Unicode,
}

impl TestMode {
    fn render(&self, groups: &[crate::braille::Group]) -> String {
        match self {
            TestMode::Dots => groups_to_dots(groups),
            TestMode::Unicode => groups_to_unicode(groups),
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum TestResult {
    Success,
    Failure {
        input: String,
        expected: String,
        actual: String,
    },
    ExpectedFailure {
        input: String,
        expected: String,
        actual: String,
    },
    UnexpectedSuccess {
        input: String,
    },
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TestResult::Success)
    }
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failure { .. })
    }
    pub fn is_expected_failure(&self) -> bool {
        matches!(self, TestResult::ExpectedFailure { .. })
    }
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, TestResult::UnexpectedSuccess { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedFailure {
    Simple(bool),
    Reason(String),
}

impl ExpectedFailure {
    fn is_failure(&self) -> bool {
        match &self {
            Self::Simple(v) => *v,
            Self::Reason(_) => true,
        }
    }
}

impl Default for ExpectedFailure {
    fn default() -> Self {
        ExpectedFailure::Simple(false)
    }
}

/// A test to verify a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    description: Option<String>,
    /// Input for the test
    input: String,
    /// Expected output of the test
    expected: String,
    /// Is the test expected to fail?
    xfail: ExpectedFailure,
}

impl Test {
    pub fn new(
        description: Option<String>,
        input: String,
        expected: String,
        xfail: ExpectedFailure,
    ) -> Self {
        Test {
            description,
            input,
            expected,
            xfail,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    fn check<R: Romanizer>(&self, translator: &Translator<R>, mode: TestMode) -> TestResult {
        let actual = mode.render(&translator.translate(&self.input));
        if actual == self.expected {
            if !self.xfail.is_failure() {
                TestResult::Success
            } else {
                TestResult::UnexpectedSuccess {
                    input: self.input.to_string(),
                }
            }
        } else if self.xfail.is_failure() {
            TestResult::ExpectedFailure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        } else {
            TestResult::Failure {
                input: self.input.to_string(),
                expected: self.expected.to_string(),
                actual,
            }
        }
    }
}

/// A group of [`Tests`](Test) that share the same test mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestSuite {
    mode: TestMode,
    tests: Vec<Test>,
}

impl TestSuite {
    pub fn new(mode: TestMode, tests: Vec<Test>) -> Self {
        TestSuite { mode, tests }
    }

    pub fn mode(&self) -> TestMode {
        self.mode
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn check<R: Romanizer>(&self, translator: &Translator<R>) -> Vec<TestResult> {
        self.tests
            .iter()
            .map(|test| test.check(translator, self.mode))
            .collect()
    }
}

/// Parse the YAML file at `path` into test suites
pub fn read_suites(path: &Path) -> Result<Vec<TestSuite>, TestError> {
    let file = File::open(path)?;
    let mut parser = YAMLParser::new(file)?;
    Ok(parser.yaml()?)
}

/// Run all tests of the YAML file at `path`
pub fn check_yaml<R: Romanizer>(
    path: &Path,
    translator: &Translator<R>,
) -> Result<Vec<TestResult>, TestError> {
    let suites = read_suites(path)?;
    Ok(suites
        .iter()
        .flat_map(|suite| suite.check(translator))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::translator::MapRomanizer;

    fn translator() -> Translator<MapRomanizer> {
        Translator::with_romanizer(MapRomanizer::new(&[('你', "ni"), ('好', "hao")]))
    }

    fn test(input: &str, expected: &str, xfail: bool) -> Test {
        Test::new(
            None,
            input.to_string(),
            expected.to_string(),
            ExpectedFailure::Simple(xfail),
        )
    }

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/yaml")
            .join(name)
    }

    #[test]
    fn check_test() {
        let suite = TestSuite::new(
            TestMode::Dots,
            vec![
                test("你好", "1345-24 125-235", false),
                test("ab", "1 12", false),
                test("ab", "1 12", true),
                test("ab", "1-12", true),
            ],
        );
        assert_eq!(
            suite.check(&translator()),
            vec![
                TestResult::Success,
                TestResult::Failure {
                    input: "ab".to_string(),
                    expected: "1 12".to_string(),
                    actual: "1-12".to_string(),
                },
                TestResult::ExpectedFailure {
                    input: "ab".to_string(),
                    expected: "1 12".to_string(),
                    actual: "1-12".to_string(),
                },
                TestResult::UnexpectedSuccess {
                    input: "ab".to_string(),
                },
            ]
        );
    }

    #[test]
    fn unicode_mode() {
        let suite = TestSuite::new(TestMode::Unicode, vec![test("你", "⠝⠊", false)]);
        assert_eq!(suite.check(&translator()), vec![TestResult::Success]);
    }

    #[test]
    fn yaml_file() {
        let results = check_yaml(&fixture("basic.yaml"), &translator()).unwrap();
        assert_eq!(results.len(), 6);
        assert_eq!(results.iter().filter(|r| r.is_success()).count(), 5);
        assert_eq!(results.iter().filter(|r| r.is_expected_failure()).count(), 1);
    }

    #[test]
    fn missing_yaml_file() {
        assert!(matches!(
            check_yaml(&fixture("no-such-file.yaml"), &translator()),
            Err(TestError::Io(_))
        ));
    }
}
