// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The outcome of a single test invocation.

use crate::assertion::AssertionFailure;

/// Result of running one test.
///
/// A test either passes, or fails with the first assertion that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    /// No assertion failed.
    Pass,
    /// The first failing assertion of the test body.
    Fail(AssertionFailure),
}

impl TestResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, TestResult::Pass)
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// The failure carried by this result, if any.
    pub fn failure(&self) -> Option<&AssertionFailure> {
        match self {
            TestResult::Pass => None,
            TestResult::Fail(failure) => Some(failure),
        }
    }
}

/// A body that runs to completion without returning anything passed.
impl From<()> for TestResult {
    fn from(_: ()) -> Self {
        TestResult::Pass
    }
}

impl From<AssertionFailure> for TestResult {
    fn from(failure: AssertionFailure) -> Self {
        TestResult::Fail(failure)
    }
}

impl From<Result<(), AssertionFailure>> for TestResult {
    fn from(result: Result<(), AssertionFailure>) -> Self {
        match result {
            Ok(()) => TestResult::Pass,
            Err(failure) => TestResult::Fail(failure),
        }
    }
}
