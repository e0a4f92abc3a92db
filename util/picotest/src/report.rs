// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Progress output.
//!
//! The runner hands every event to a [`Reporter`]. The console format is fixed
//! and existing driver scripts depend on it:
//!
//! ```text
//! <suite-name>
//!   PASS <test-name>
//!   FAIL <test-name> '<expression-text>' (<file>:<line>)
//! ```

use core::fmt;

use crate::test_framework_basic::TestResult;

/// Receives progress events from the runner.
pub trait Reporter {
    /// A suite is about to run its first test.
    fn suite_started(&mut self, name: &str);

    /// A test of the current suite finished.
    fn test_finished(&mut self, name: &str, result: &TestResult);

    /// Every test of the suite has run.
    fn suite_finished(&mut self, _name: &str) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn suite_started(&mut self, name: &str) {
        (**self).suite_started(name);
    }

    fn test_finished(&mut self, name: &str, result: &TestResult) {
        (**self).test_finished(name, result);
    }

    fn suite_finished(&mut self, name: &str) {
        (**self).suite_finished(name);
    }
}

/// One per-test progress line, without the trailing newline.
pub struct ProgressLine<'a> {
    pub name: &'a str,
    pub result: &'a TestResult,
}

impl fmt::Display for ProgressLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            TestResult::Pass => write!(f, "  PASS {}", self.name),
            TestResult::Fail(failure) => write!(f, "  FAIL {} {}", self.name, failure),
        }
    }
}

/// Writes the console format into any [`fmt::Write`] sink.
///
/// With a `String` sink this captures a run's output verbatim.
#[derive(Debug, Default)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: fmt::Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> Reporter for ConsoleReporter<W> {
    fn suite_started(&mut self, name: &str) {
        let _ = writeln!(self.out, "{name}");
    }

    fn test_finished(&mut self, name: &str, result: &TestResult) {
        let _ = writeln!(self.out, "{}", ProgressLine { name, result });
    }
}

#[cfg(feature = "std")]
pub use self::io::{IoReporter, StdoutReporter};

#[cfg(feature = "std")]
mod io {
    use std::io::{self, Write};

    use super::{ProgressLine, Reporter};
    use crate::test_framework_basic::TestResult;

    /// Writes the console format into an [`io::Write`] sink.
    ///
    /// Output is flushed once per suite so each suite's lines reach the
    /// terminal together.
    #[derive(Debug)]
    pub struct IoReporter<W: Write> {
        out: W,
    }

    /// Reporter for drivers printing to the process's standard output.
    pub type StdoutReporter = IoReporter<io::Stdout>;

    impl IoReporter<io::Stdout> {
        pub fn stdout() -> Self {
            Self::new(io::stdout())
        }
    }

    impl<W: Write> IoReporter<W> {
        pub fn new(out: W) -> Self {
            Self { out }
        }

        pub fn into_inner(self) -> W {
            self.out
        }
    }

    impl<W: Write> Reporter for IoReporter<W> {
        fn suite_started(&mut self, name: &str) {
            if let Err(err) = writeln!(self.out, "{name}") {
                debug!("failed to write suite header: {err}");
            }
        }

        fn test_finished(&mut self, name: &str, result: &TestResult) {
            if let Err(err) = writeln!(self.out, "{}", ProgressLine { name, result }) {
                debug!("failed to write progress line: {err}");
            }
        }

        fn suite_finished(&mut self, _name: &str) {
            let _ = self.out.flush();
        }
    }
}
