// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Suite registry for drivers.
//!
//! Suites may live in other modules or crates. The driver imports each suite
//! handle it wants to run into a [`SuiteRegistry`], then resolves the names it
//! was asked for before running anything.

use alloc::{string::ToString, vec::Vec};

use crate::{
    error::{Error, Result},
    test_framework::Suite,
};

/// Ordered mapping from suite name to suite handle.
///
/// Suites keep their import order, which is the order a full run uses.
#[derive(Default)]
pub struct SuiteRegistry<'a> {
    suites: Vec<&'a dyn Suite>,
}

impl<'a> SuiteRegistry<'a> {
    pub fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Import a suite so the driver can run it by name.
    ///
    /// Fails if a suite with the same name is already imported.
    pub fn import(&mut self, suite: &'a dyn Suite) -> Result<()> {
        let name = suite.name();
        if self.get(name).is_some() {
            return Err(Error::DuplicateSuite(name.to_string()));
        }
        trace!("importing suite {name}");
        self.suites.push(suite);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&'a dyn Suite> {
        self.suites.iter().copied().find(|s| s.name() == name)
    }

    /// Look up every name, in the given order.
    ///
    /// Either all names resolve, or the first unknown one is reported and
    /// nothing is returned.
    pub fn resolve<I, S>(&self, names: I) -> Result<Vec<&'a dyn Suite>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| Error::UnknownSuite(name.to_string()))
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.suites.iter().map(|s| s.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Suite> + '_ {
        self.suites.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}
