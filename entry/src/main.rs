// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Sample driver: imports the `strlen` and `reverse` suites, runs them and
//! prints the summary. Exits with a failure status when any test failed.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use klogger::kprintln;
use log::{debug, error, warn};
use picotest::{SuiteRegistry, TestStats};

mod reverse;
mod strlen;


#[derive(Debug, Parser)]
#[command(name = "picotest-sample", version, about)]
struct Args {
    /// Suites to run, in this order. Runs every suite when omitted.
    #[arg(value_name = "SUITE")]
    suites: Vec<String>,

    /// List the available suites and exit.
    #[arg(long)]
    list: bool,

    /// Log level for diagnostics on standard error.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"],
    )]
    log_level: String,
}

/// Every suite this driver knows about, in run order.
fn sample_registry() -> picotest::Result<SuiteRegistry<'static>> {
    let mut registry = SuiteRegistry::new();
    registry.import(&strlen::STRLEN)?;
    registry.import(&reverse::REVERSE)?;
    Ok(registry)
}

/// Write the imported suite names, one per line.
fn list_suites(registry: &SuiteRegistry<'_>, mut out: impl Write) -> ExitCode {
    let written = registry
        .names()
        .try_for_each(|name| writeln!(out, "{name}"))
        .and_then(|()| out.flush());
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("failed to list suites: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Exit status for the outcome of a run.
fn exit_status(outcome: picotest::Result<TestStats>) -> ExitCode {
    match outcome {
        Ok(stats) => stats.exit_code(),
        Err(err) => {
            kprintln!("picotest-sample: {err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = klogger::init_klogger() {
        kprintln!("picotest-sample: cannot install logger: {err}");
    }
    klogger::set_log_level(&args.log_level);
    debug!("{args:?}");

    let registry = match sample_registry() {
        Ok(registry) => registry,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        return list_suites(&registry, io::stdout().lock());
    }

    exit_status(picotest::test_run(&registry, args.suites.as_slice()))
}
