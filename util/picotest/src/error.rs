// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Errors raised while wiring suites into a driver.
//!
//! Failing assertions are not errors at this level: they are carried by
//! [`TestResult`](crate::TestResult) and only show up in the counters.

use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A suite with the same name was already imported
    DuplicateSuite(String),
    /// No suite with this name was imported
    UnknownSuite(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateSuite(name) => write!(f, "suite `{name}` is already imported"),
            Error::UnknownSuite(name) => write!(f, "no suite named `{name}`"),
        }
    }
}

impl core::error::Error for Error {}

/// Convenience type alias for Result with picotest's Error
pub type Result<T> = core::result::Result<T, Error>;
