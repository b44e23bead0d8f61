use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub mod generator;
pub mod solver;

use solver::Arrangement;

/// Errors raised while reading contest input.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("unexpected end of input after line {line}")]
    UnexpectedEof { line: usize },
    #[error("line {line}: invalid token `{token}`")]
    InvalidToken { line: usize, token: String },
    #[error("case #{case}: expected {expected} weights, found {found}")]
    CountMismatch {
        case: usize,
        expected: usize,
        found: usize,
    },
    #[error("case #{case}: ant weights must be positive")]
    NonPositiveWeight { case: usize },
    #[error("case #{case}: weight {weight} exceeds the limit of {limit}")]
    WeightOutOfRange { case: usize, weight: u128, limit: u64 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Line oriented input reader for contest input
pub struct Scanner {
    reader: Box<dyn BufRead>,
    line: usize,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line: 0,
        }
    }

    /// Next non-blank line, trimmed.
    pub fn next_line(&mut self) -> Result<String, InputError> {
        loop {
            let mut input = String::new();
            if self.reader.read_line(&mut input)? == 0 {
                return Err(InputError::UnexpectedEof { line: self.line });
            }
            self.line += 1;
            let trimmed = input.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    /// Parses the next line as a single value.
    pub fn parse<T: FromStr>(&mut self) -> Result<T, InputError> {
        let line = self.next_line()?;
        self.parse_token(&line)
    }

    /// Parses the next line as whitespace separated values.
    pub fn parse_vec<T: FromStr>(&mut self) -> Result<Vec<T>, InputError> {
        let line = self.next_line()?;
        line.split_whitespace()
            .map(|token| self.parse_token(token))
            .collect()
    }

    fn parse_token<T: FromStr>(&self, token: &str) -> Result<T, InputError> {
        token.parse().map_err(|_| InputError::InvalidToken {
            line: self.line,
            token: token.to_string(),
        })
    }
}

/// Output writer that buffers into memory until the whole run succeeded
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("writing to a Vec cannot fail");
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(&self.0)?;
        out.flush()
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// A solver entry point: reads every test case from `input` and writes one line per case.
pub type Task = fn(&mut Scanner, &mut Writer, Arrangement) -> Result<(), InputError>;

/// Named collection of solvers for one problem
pub struct TaskGroup {
    name: &'static str,
    tasks: Vec<(&'static str, Task)>,
}

impl TaskGroup {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, task: Task) -> Self {
        self.tasks.push((name, task));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, name: &str) -> Option<Task> {
        self.tasks
            .iter()
            .find(|(task_name, _)| *task_name == name)
            .map(|(_, task)| *task)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|(name, _)| *name).collect()
    }
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use std::time::{Duration, Instant};

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(root: &Path, category: &str, problem_name: &str) -> Vec<usize> {
        let test_dir = root.join(category).join(problem_name);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            test_numbers.push(num);
                        }
                    }
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case(
        root: &Path,
        category: &str,
        arrangement: Arrangement,
        test_num: usize,
        task: Task,
    ) -> Result<(String, String, Duration), String> {
        let test_dir = root.join(category).join(arrangement.fixture_name());
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        task(&mut scanner, &mut writer, arrangement)
            .map_err(|e| format!("{}: {}", in_file.display(), e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// One fixture run: (expected, actual, duration) on success
    pub struct FixtureRun {
        pub arrangement: Arrangement,
        pub test_num: usize,
        pub outcome: Result<(String, String, Duration), String>,
    }

    impl FixtureRun {
        pub fn passed(&self) -> bool {
            matches!(&self.outcome, Ok((expected, actual, _)) if expected == actual)
        }

        pub fn label(&self) -> String {
            format!("{}/{}", self.arrangement.fixture_name(), self.test_num)
        }
    }

    /// Run every fixture of both arrangements found under `root/category`
    pub fn run_fixtures(root: &Path, category: &str, task: Task) -> Vec<FixtureRun> {
        [Arrangement::LineOrder, Arrangement::Subset]
            .into_iter()
            .flat_map(|arrangement| {
                discover_tests(root, category, arrangement.fixture_name())
                    .into_iter()
                    .map(move |test_num| FixtureRun {
                        arrangement,
                        test_num,
                        outcome: run_test_case(root, category, arrangement, test_num, task),
                    })
            })
            .collect()
    }

    /// Verify every fixture, panicking on the first mismatch
    pub fn verify_all_tests(root: &Path, category: &str, task: Task) {
        let runs = run_fixtures(root, category, task);
        for arrangement in [Arrangement::LineOrder, Arrangement::Subset] {
            assert!(
                runs.iter().any(|run| run.arrangement == arrangement),
                "No test cases found for {}/{}",
                category,
                arrangement.fixture_name()
            );
        }

        for run in &runs {
            match &run.outcome {
                Ok((expected, actual, _)) => assert_eq!(
                    actual,
                    expected,
                    "{}/{} failed\nExpected:\n{}\nActual:\n{}",
                    category,
                    run.label(),
                    expected,
                    actual
                ),
                Err(e) => panic!("{}/{} error: {}", category, run.label(), e),
            }
        }
    }

    /// Run every fixture and print results (for CLI usage). Returns (passed, failed).
    pub fn run_all_tests(root: &Path, category: &str, task: Task) -> (usize, usize) {
        let runs = run_fixtures(root, category, task);

        let mut total_duration = Duration::ZERO;
        for run in &runs {
            match &run.outcome {
                Ok((expected, actual, duration)) => {
                    total_duration += *duration;
                    let verdict = if run.passed() { "✓ PASSED" } else { "✗ FAILED" };
                    println!("{} {} ({:.2}s)", verdict, run.label(), duration.as_secs_f64());
                    if !run.passed() {
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                    }
                }
                Err(e) => println!("✗ ERROR {} - {}", run.label(), e),
            }
        }

        let failed = runs.iter().filter(|run| !run.passed()).count();
        println!("\nResults: {} passed, {} failed", runs.len() - failed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        (runs.len() - failed, failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scanner(input: &str) -> Scanner {
        Scanner::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_scanner_skips_blank_lines() {
        let mut input = scanner("2\n\n  3 4 5  \n");
        assert_eq!(input.parse::<usize>().unwrap(), 2);
        assert_eq!(input.parse_vec::<u64>().unwrap(), vec![3, 4, 5]);
    }

    #[test]
    fn test_scanner_reports_eof() {
        let mut input = scanner("1\n");
        input.next_line().unwrap();
        assert!(matches!(
            input.next_line(),
            Err(InputError::UnexpectedEof { line: 1 })
        ));
    }

    #[test]
    fn test_scanner_reports_invalid_token() {
        let mut input = scanner("1 two 3\n");
        match input.parse_vec::<u64>() {
            Err(InputError::InvalidToken { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "two");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_fixture_runs_cover_both_arrangements() {
        let task = solver::tasks().get("large").unwrap();
        let runs = testing::run_fixtures(std::path::Path::new("data"), "ant_stack", task);
        assert!(runs.iter().any(|run| run.arrangement == Arrangement::LineOrder));
        assert!(runs.iter().any(|run| run.arrangement == Arrangement::Subset));
        assert!(runs.iter().all(|run| run.passed()), "a fixture failed");
        let (passed, failed) = testing::run_all_tests(std::path::Path::new("data"), "ant_stack", task);
        assert_eq!((passed, failed), (runs.len(), 0));
    }

    #[test]
    fn test_missing_fixture_dir() {
        let task = solver::tasks().get("small").unwrap();
        let root = std::path::Path::new("no-such-data");
        assert!(testing::run_fixtures(root, "ant_stack", task).is_empty());
    }

    #[test]
    fn test_task_group_lookup() {
        let group = solver::tasks();
        assert_eq!(group.name(), "ant_stack");
        assert_eq!(group.names(), vec!["large", "small"]);
        assert!(group.get("large").is_some());
        assert!(group.get("medium").is_none());
    }
}
