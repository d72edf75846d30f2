//! Common test utilities module
//!
//! Provides a [`Recorder`] context that keeps every reported failure together
//! with its outcome, for tests that exercise the `TestContext` seam directly.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use pandrs_testkit::{Failure, Outcome, Result, TestContext};
use tempfile::TempDir;

#[derive(Default)]
pub struct Recorder {
    dirs: RefCell<Vec<TempDir>>,
    reports: RefCell<Vec<(Outcome, Failure)>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(Outcome, Failure)> {
        self.reports.borrow().clone()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.reports
            .borrow()
            .iter()
            .filter(|(o, _)| *o == outcome)
            .count()
    }
}

impl TestContext for Recorder {
    fn temp_dir(&self) -> Result<PathBuf> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().to_path_buf();
        self.dirs.borrow_mut().push(dir);
        Ok(path)
    }

    fn record(&self, failure: Failure) {
        self.reports.borrow_mut().push((Outcome::Record, failure));
    }

    fn abort(&self, failure: Failure) -> ! {
        self.reports
            .borrow_mut()
            .push((Outcome::Abort, failure.clone()));
        panic!("aborted: {}", failure);
    }
}
