// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Tests and suites.
//!
//! A test is anything implementing [`Testable`]: a name plus a zero-argument
//! body producing a [`TestResult`]. A suite is anything implementing [`Suite`]:
//! a name plus an ordered list of tests.
//!
//! Both come in a static flavour, built at compile time by the `def_test` and
//! `def_suite` macros ([`TestDescriptor`], [`SuiteDescriptor`]), and an owned
//! flavour built at run time from closures ([`TestCase`], [`TestSuite`]).

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;

use crate::test_framework_basic::TestResult;

/// A named, independently invokable test.
pub trait Testable {
    fn name(&self) -> &str;

    /// Run the test body once. Must not touch any run counters.
    fn run(&self) -> TestResult;
}

/// A statically registered test function.
#[derive(Clone, Copy)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

impl TestDescriptor {
    pub const fn new(name: &'static str, func: fn() -> TestResult) -> Self {
        Self { name, func }
    }
}

impl Testable for TestDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self) -> TestResult {
        (self.func)()
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A test built at run time from a closure.
///
/// The closure may return a [`TestResult`], `()` or
/// `Result<(), AssertionFailure>`.
///
/// [`AssertionFailure`]: crate::AssertionFailure
pub struct TestCase {
    name: String,
    body: Box<dyn Fn() -> TestResult>,
}

impl TestCase {
    pub fn new<F, R>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: Into<TestResult>,
    {
        Self {
            name: name.into(),
            body: Box::new(move || body().into()),
        }
    }
}

impl Testable for TestCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self) -> TestResult {
        (self.body)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named, ordered group of tests.
pub trait Suite {
    fn name(&self) -> &str;

    /// The tests of this suite, in declaration order.
    fn tests(&self) -> Vec<&dyn Testable>;
}

/// A suite declared at compile time, usually through `#[def_suite]`.
#[derive(Debug, Clone, Copy)]
pub struct SuiteDescriptor {
    pub name: &'static str,
    pub tests: &'static [TestDescriptor],
}

impl SuiteDescriptor {
    pub const fn new(name: &'static str, tests: &'static [TestDescriptor]) -> Self {
        Self { name, tests }
    }
}

impl Suite for SuiteDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn tests(&self) -> Vec<&dyn Testable> {
        self.tests.iter().map(|t| t as &dyn Testable).collect()
    }
}

/// A suite assembled at run time.
///
/// # Example
///
/// ```rust
/// use picotest::{Suite, TestSuite, check};
///
/// let suite = TestSuite::new("math")
///     .test("adds", || check(2 + 2 == 4, "2+2==4", file!(), line!()))
///     .test("empty", || {});
///
/// assert_eq!(suite.name(), "math");
/// assert_eq!(suite.len(), 2);
/// ```
#[derive(Debug)]
pub struct TestSuite {
    name: String,
    tests: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    /// Append a test built from `body`, returning the suite for chaining.
    pub fn test<F, R>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: Into<TestResult>,
    {
        self.push(TestCase::new(name, body));
        self
    }

    /// Append an already built test case.
    pub fn push(&mut self, case: TestCase) {
        self.tests.push(case);
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl Suite for TestSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn tests(&self) -> Vec<&dyn Testable> {
        self.tests.iter().map(|t| t as &dyn Testable).collect()
    }
}
