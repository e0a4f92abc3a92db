// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Assertion primitives.
//!
//! An assertion checks one boolean condition. When the condition is false the
//! enclosing test body stops right there and reports the source text of the
//! condition together with its file and line. Only the first failure of a test
//! is ever reported.
//!
//! Two flavours are provided:
//!
//! - the [`check!`](crate::check!) family of macros, which capture the
//!   condition's source text with `stringify!` and `return` a failed
//!   [`TestResult`](crate::TestResult) from the test body;
//! - the [`check`] function, for callers that pass the expression text
//!   themselves and exit early with `?`.

use core::fmt;

/// A failed assertion: the condition's source text and where it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssertionFailure {
    pub expression: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl AssertionFailure {
    pub const fn new(expression: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            expression,
            file,
            line,
        }
    }
}

/// Renders as `'<expression>' (<file>:<line>)`.
impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}:{})", self.expression, self.file, self.line)
    }
}

impl core::error::Error for AssertionFailure {}

/// Check `condition`, reporting `expression` at `file:line` when it is false.
///
/// # Example
///
/// ```rust
/// use picotest::{AssertionFailure, check};
///
/// fn bad_add() -> Result<(), AssertionFailure> {
///     check(2 + 2 == 4, "2+2==4", "m.t", 9)?;
///     check(2 + 2 == 5, "2+2==5", "m.t", 10)?;
///     unreachable!()
/// }
///
/// let failure = bad_add().unwrap_err();
/// assert_eq!(failure.to_string(), "'2+2==5' (m.t:10)");
/// ```
#[inline]
pub fn check(
    condition: bool,
    expression: &'static str,
    file: &'static str,
    line: u32,
) -> Result<(), AssertionFailure> {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(expression, file, line))
    }
}

/// Assert that a condition holds, otherwise fail the current test.
///
/// Must be used in a body returning [`TestResult`](crate::TestResult), such as
/// a function marked with [`def_test`](crate::def_test).
///
/// The reported text is the condition as rendered by `stringify!`, so
/// `check!(2+2==5)` reports `2 + 2 == 5`. Scripts matching the exact source
/// spelling should use the [`check`] function with an explicit text instead.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return $crate::TestResult::Fail($crate::AssertionFailure::new(
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
            ));
        }
    };
}

/// Assert that two expressions are equal, otherwise fail the current test.
///
/// The reported text is `<left> == <right>`; the values are not shown.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    return $crate::TestResult::Fail($crate::AssertionFailure::new(
                        ::core::concat!(
                            ::core::stringify!($left),
                            " == ",
                            ::core::stringify!($right)
                        ),
                        ::core::file!(),
                        ::core::line!(),
                    ));
                }
            }
        }
    };
}

/// Assert that two expressions differ, otherwise fail the current test.
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                if *left_val == *right_val {
                    return $crate::TestResult::Fail($crate::AssertionFailure::new(
                        ::core::concat!(
                            ::core::stringify!($left),
                            " != ",
                            ::core::stringify!($right)
                        ),
                        ::core::file!(),
                        ::core::line!(),
                    ));
                }
            }
        }
    };
}
