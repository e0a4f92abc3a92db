// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Suite runner and run counters.
//!
//! A run goes through `initialize -> run* -> finalize`:
//!
//! - [`TestRunner::initialize`] starts from a zeroed [`RunState`];
//! - [`TestRunner::run`] runs one suite, printing its name and one line per
//!   test, and counts every test into exactly one of `passes`/`failures`;
//! - [`TestRunner::finalize`] consumes the runner and hands back the final
//!   [`TestStats`].
//!
//! There is no reset: a new run needs a new runner.

use core::fmt;

use crate::{
    error::Result,
    registry::SuiteRegistry,
    report::Reporter,
    test_framework::Suite,
    test_framework_basic::TestResult,
};

/// Pass/failure counters of one test-running session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    passes: usize,
    failures: usize,
}

impl RunState {
    pub const fn new() -> Self {
        Self {
            passes: 0,
            failures: 0,
        }
    }

    /// Count one test invocation.
    pub fn record(&mut self, result: &TestResult) {
        match result {
            TestResult::Pass => self.passes += 1,
            TestResult::Fail(_) => self.failures += 1,
        }
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Number of test invocations recorded so far.
    pub fn total(&self) -> usize {
        self.passes + self.failures
    }
}

/// Final counters of a run.
///
/// `Display` renders the summary drivers print after the last suite:
/// `\n<passed> PASSED\n<failed> FAILED\n`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TestStats {
    pub passed: usize,
    pub failed: usize,
}

impl TestStats {
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// A run succeeds when no test failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run.
    #[cfg(feature = "std")]
    pub fn exit_code(&self) -> std::process::ExitCode {
        if self.is_success() {
            std::process::ExitCode::SUCCESS
        } else {
            std::process::ExitCode::FAILURE
        }
    }
}

impl From<RunState> for TestStats {
    fn from(state: RunState) -> Self {
        Self {
            passed: state.passes,
            failed: state.failures,
        }
    }
}

impl fmt::Display for TestStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{} PASSED\n{} FAILED\n", self.passed, self.failed)
    }
}

/// Run every test of `suite` once, in order, against `state`.
pub fn run_suite(suite: &dyn Suite, state: &mut RunState, reporter: &mut dyn Reporter) {
    let name = suite.name();
    debug!("running suite {name}");
    reporter.suite_started(name);

    for test in suite.tests() {
        let result = test.run();
        match &result {
            TestResult::Pass => debug!("{name}::{} passed", test.name()),
            TestResult::Fail(failure) => debug!("{name}::{} failed: {failure}", test.name()),
        }
        state.record(&result);
        reporter.test_finished(test.name(), &result);
    }

    reporter.suite_finished(name);
}

/// Drives suites against a single [`RunState`].
pub struct TestRunner<R: Reporter> {
    state: RunState,
    reporter: R,
}

impl<R: Reporter> TestRunner<R> {
    /// Start a fresh run with zeroed counters.
    pub fn initialize(reporter: R) -> Self {
        Self {
            state: RunState::new(),
            reporter,
        }
    }

    /// Run one suite. Running the same suite again counts its tests again.
    pub fn run(&mut self, suite: &dyn Suite) {
        run_suite(suite, &mut self.state, &mut self.reporter);
    }

    /// Run the named suites of `registry` in the given order, or every suite
    /// in import order when `names` is empty.
    ///
    /// All names are resolved before the first suite starts, so an unknown
    /// name leaves the counters untouched.
    pub fn run_registered<S: AsRef<str>>(
        &mut self,
        registry: &SuiteRegistry<'_>,
        names: &[S],
    ) -> Result<()> {
        if names.is_empty() {
            for suite in registry.iter() {
                self.run(suite);
            }
            return Ok(());
        }

        let suites = registry.resolve(names)?;
        for suite in suites {
            self.run(suite);
        }
        Ok(())
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn stats(&self) -> TestStats {
        self.state.into()
    }

    /// End the run and return its counters.
    pub fn finalize(self) -> TestStats {
        let stats = self.stats();
        if stats.is_success() {
            info!("{} tests passed", stats.passed);
        } else {
            warn!("{} of {} tests failed", stats.failed, stats.total());
        }
        stats
    }
}

/// Run suites from `registry` on standard output and print the summary.
///
/// `names` selects suites as in [`TestRunner::run_registered`].
///
/// # Example
///
/// ```rust,no_run
/// use picotest::{SuiteRegistry, TestSuite};
///
/// let math = TestSuite::new("math").test("adds", || {});
/// let mut registry = SuiteRegistry::new();
/// registry.import(&math)?;
///
/// let stats = picotest::test_run(&registry, &[] as &[&str])?;
/// std::process::exit(if stats.is_success() { 0 } else { 1 });
/// # Ok::<(), picotest::Error>(())
/// ```
#[cfg(feature = "std")]
pub fn test_run<S: AsRef<str>>(registry: &SuiteRegistry<'_>, names: &[S]) -> Result<TestStats> {
    use std::io::Write;

    let mut runner = TestRunner::initialize(crate::report::StdoutReporter::stdout());
    runner.run_registered(registry, names)?;
    let stats = runner.finalize();

    let mut out = std::io::stdout().lock();
    if let Err(err) = write!(out, "{stats}").and_then(|()| out.flush()) {
        warn!("failed to write summary: {err}");
    }
    Ok(stats)
}
