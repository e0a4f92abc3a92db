// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! A minimal unit-test framework.
//!
//! Tests are plain functions (or closures) returning a [`TestResult`]. They
//! are grouped into named suites, and a [`TestRunner`] runs suites one after
//! another while counting passes and failures:
//!
//! ```rust
//! use picotest::{check, def_suite, def_test, ConsoleReporter, TestRunner};
//!
//! #[def_test]
//! fn adds() {
//!     check!(2 + 2 == 4);
//! }
//!
//! #[def_suite]
//! fn math() {
//!     run_test!(adds);
//! }
//!
//! let mut reporter = ConsoleReporter::new(String::new());
//! let mut runner = TestRunner::initialize(&mut reporter);
//! runner.run(&MATH);
//! let stats = runner.finalize();
//!
//! assert!(stats.is_success());
//! assert_eq!(reporter.into_inner(), "math\n  PASS adds\n");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate log;
extern crate alloc;
// Lets the proc macros name `picotest::...` from inside this crate too.
extern crate self as picotest;

pub mod assertion;
pub mod error;
pub mod registry;
pub mod report;
pub mod runner;
pub mod test_framework;
pub mod test_framework_basic;

#[cfg(test)]
mod tests;

pub use assertion::{AssertionFailure, check};
pub use error::{Error, Result};
// Re-export the def_test and def_suite macros from the macros crate
pub use macros::{def_suite, def_test};
pub use registry::SuiteRegistry;
#[cfg(feature = "std")]
pub use report::{IoReporter, StdoutReporter};
pub use report::{ConsoleReporter, ProgressLine, Reporter};
#[cfg(feature = "std")]
pub use runner::test_run;
pub use runner::{RunState, TestRunner, TestStats, run_suite};
pub use test_framework::{Suite, SuiteDescriptor, TestCase, TestDescriptor, TestSuite, Testable};
pub use test_framework_basic::TestResult;
