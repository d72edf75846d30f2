//! Test-execution context
//!
//! Fixture helpers never return failures as values. They report them to a
//! [`TestContext`] as one of two outcomes: [`Outcome::Record`] marks the test
//! failed and lets it continue, [`Outcome::Abort`] stops it immediately.
//! [`TestCase`] is the context used with the built-in `#[test]` harness.

use std::cell::RefCell;
use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;

/// Severity of a reported failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Mark the test failed and keep running
    Record,
    /// Mark the test failed and stop it now
    Abort,
}

/// A failure reported by a fixture helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    message: String,
    location: &'static Location<'static>,
}

impl Failure {
    pub fn new(message: impl Into<String>, location: &'static Location<'static>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Failure located at the caller
    #[track_caller]
    pub fn here(message: impl Into<String>) -> Self {
        Self::new(message, Location::caller())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.message,
            self.location.file(),
            self.location.line()
        )
    }
}

/// What fixture helpers need from the enclosing test run
pub trait TestContext {
    /// Allocate a fresh directory that lives until the test ends
    fn temp_dir(&self) -> Result<PathBuf>;

    /// Report a failure and continue
    fn record(&self, failure: Failure);

    /// Report a failure and stop the test. Never returns.
    fn abort(&self, failure: Failure) -> !;

    /// Report a failure with the given outcome
    fn fail(&self, outcome: Outcome, failure: Failure) {
        match outcome {
            Outcome::Record => self.record(failure),
            Outcome::Abort => self.abort(failure),
        }
    }
}

/// Settings for a [`TestCase`]
#[derive(Debug, Clone)]
pub struct TestCaseConfig {
    root: Option<PathBuf>,
    prefix: String,
    keep: bool,
}

impl Default for TestCaseConfig {
    fn default() -> Self {
        Self {
            root: None,
            prefix: "pandrs_test_".to_string(),
            keep: false,
        }
    }
}

impl TestCaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parent directory for ephemeral directories (system temp dir by default)
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Name prefix for ephemeral directories
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Keep ephemeral directories after the test (for debugging)
    pub fn keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }
}

/// Context for one test invocation.
///
/// Ephemeral directories are removed when the `TestCase` is dropped, including
/// during unwinding. Recorded failures are raised as a single panic on drop
/// (or [`TestCase::finish`]) unless the thread is already panicking.
#[derive(Debug)]
pub struct TestCase {
    name: String,
    config: TestCaseConfig,
    dirs: RefCell<Vec<TempDir>>,
    failures: RefCell<Vec<Failure>>,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, TestCaseConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: TestCaseConfig) -> Self {
        Self {
            name: name.into(),
            config,
            dirs: RefCell::new(Vec::new()),
            failures: RefCell::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failures recorded so far
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    /// Whether any failure has been recorded
    pub fn has_failed(&self) -> bool {
        !self.failures.borrow().is_empty()
    }

    /// Remove and return recorded failures, so they are not raised on drop
    pub fn take_failures(&self) -> Vec<Failure> {
        self.failures.borrow_mut().drain(..).collect()
    }

    /// End the test, panicking if any failure was recorded
    pub fn finish(self) {
        // Drop does the work
    }

    fn summary(&self, failures: &[Failure]) -> String {
        let mut out = format!(
            "test `{}` recorded {} failure(s):",
            self.name,
            failures.len()
        );
        for failure in failures {
            out.push_str("\n  ");
            out.push_str(&failure.to_string());
        }
        out
    }

    fn release_dirs(&mut self) {
        let dirs = std::mem::take(self.dirs.get_mut());
        for dir in dirs {
            if self.config.keep {
                #[allow(deprecated)]
                let path = dir.into_path();
                log::info!("keeping fixture directory {}", path.display());
            } else {
                let path = dir.path().to_path_buf();
                if let Err(err) = dir.close() {
                    log::warn!("failed to remove {}: {}", path.display(), err);
                }
            }
        }
    }
}

impl TestContext for TestCase {
    fn temp_dir(&self) -> Result<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&self.config.prefix);

        let dir = match self.config.root.as_deref() {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        let path = dir.path().to_path_buf();
        log::debug!("test `{}`: allocated {}", self.name, path.display());
        self.dirs.borrow_mut().push(dir);
        Ok(path)
    }

    fn record(&self, failure: Failure) {
        log::warn!("test `{}`: {}", self.name, failure);
        self.failures.borrow_mut().push(failure);
    }

    fn abort(&self, failure: Failure) -> ! {
        log::error!("test `{}` aborted: {}", self.name, failure);
        panic!("test `{}` aborted: {}", self.name, failure);
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        self.release_dirs();

        let failures = std::mem::take(self.failures.get_mut());
        if !failures.is_empty() && !std::thread::panicking() {
            panic!("{}", self.summary(&failures));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_collects_failures() {
        let case = TestCase::new("record");
        case.fail(Outcome::Record, Failure::here("first"));
        case.record(Failure::here("second"));

        assert!(case.has_failed());
        let failures = case.take_failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].message(), "first");
        assert_eq!(failures[0].location().file(), file!());
        assert!(!case.has_failed());
    }

    #[test]
    #[should_panic(expected = "recorded 1 failure(s)")]
    fn test_drop_raises_recorded_failures() {
        let case = TestCase::new("drop");
        case.record(Failure::here("mismatch"));
    }

    #[test]
    #[should_panic(expected = "test `abort` aborted: stop")]
    fn test_abort_panics() {
        let case = TestCase::new("abort");
        case.fail(Outcome::Abort, Failure::here("stop"));
    }

    #[test]
    fn test_temp_dirs_are_private_and_removed() {
        let first;
        let second;
        {
            let case = TestCase::with_config("dirs", TestCaseConfig::new().prefix("dirs_"));
            first = case.temp_dir().unwrap();
            second = case.temp_dir().unwrap();
            assert_ne!(first, second);
            assert!(first.is_dir());
            assert!(first
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("dirs_")));
        }
        assert!(!first.exists());
        assert!(!second.exists());
    }

    #[test]
    fn test_keep_retains_directory() {
        let root = tempfile::tempdir().unwrap();
        let path;
        {
            let case = TestCase::with_config("keep", TestCaseConfig::new().root(root.path()).keep(true));
            path = case.temp_dir().unwrap();
        }
        assert!(path.is_dir());
        assert!(path.starts_with(root.path()));
    }
}
