// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use alloc::{format, string::String};

use crate::{
    AssertionFailure, ConsoleReporter, ProgressLine, Reporter, RunState, TestResult, TestStats,
    check,
};

#[test]
fn test_assertion_failure_display() {
    let failure = AssertionFailure::new("2+2==5", "m.t", 10);
    assert_eq!(format!("{failure}"), "'2+2==5' (m.t:10)");
}

#[test]
fn test_check_helper() {
    assert_eq!(check(true, "true", "a.rs", 1), Ok(()));
    assert_eq!(
        check(false, "false", "a.rs", 2),
        Err(AssertionFailure::new("false", "a.rs", 2))
    );
}

#[test]
fn test_result_conversions() {
    assert_eq!(TestResult::from(()), TestResult::Pass);
    assert_eq!(TestResult::from(Ok::<(), AssertionFailure>(())), TestResult::Pass);

    let failure = AssertionFailure::new("x", "f.rs", 3);
    assert_eq!(TestResult::from(failure), TestResult::Fail(failure));
    assert_eq!(TestResult::from(Err::<(), _>(failure)), TestResult::Fail(failure));
}

#[test]
fn test_result_accessors() {
    let failure = AssertionFailure::new("x", "f.rs", 3);
    assert!(TestResult::Pass.is_pass());
    assert!(TestResult::Pass.failure().is_none());
    assert!(TestResult::Fail(failure).is_fail());
    assert_eq!(TestResult::Fail(failure).failure(), Some(&failure));
}

#[test]
fn test_run_state_counts_each_invocation_once() {
    let mut state = RunState::new();
    assert_eq!(state.total(), 0);

    state.record(&TestResult::Pass);
    state.record(&TestResult::Fail(AssertionFailure::new("x", "f.rs", 1)));
    state.record(&TestResult::Pass);

    assert_eq!(state.passes(), 2);
    assert_eq!(state.failures(), 1);
    assert_eq!(state.total(), 3);
}

#[test]
fn test_stats_summary_format() {
    let stats = TestStats {
        passed: 4,
        failed: 0,
    };
    assert_eq!(format!("{stats}"), "\n4 PASSED\n0 FAILED\n");
    assert!(stats.is_success());

    let stats = TestStats {
        passed: 1,
        failed: 1,
    };
    assert_eq!(format!("{stats}"), "\n1 PASSED\n1 FAILED\n");
    assert!(!stats.is_success());
    assert_eq!(stats.total(), 2);
}

#[test]
fn test_stats_from_run_state() {
    let mut state = RunState::new();
    state.record(&TestResult::Pass);
    assert_eq!(
        TestStats::from(state),
        TestStats {
            passed: 1,
            failed: 0
        }
    );
    assert_eq!(TestStats::new(), TestStats::from(RunState::new()));
}

#[test]
fn test_progress_lines() {
    let pass = TestResult::Pass;
    let fail = TestResult::Fail(AssertionFailure::new("2+2==5", "m.t", 10));

    assert_eq!(
        format!(
            "{}",
            ProgressLine {
                name: "adds",
                result: &pass
            }
        ),
        "  PASS adds"
    );
    assert_eq!(
        format!(
            "{}",
            ProgressLine {
                name: "bad_add",
                result: &fail
            }
        ),
        "  FAIL bad_add '2+2==5' (m.t:10)"
    );
}

#[test]
fn test_console_reporter_layout() {
    let mut reporter = ConsoleReporter::new(String::new());
    reporter.suite_started("math");
    reporter.test_finished("adds", &TestResult::Pass);
    reporter.suite_finished("math");

    assert_eq!(reporter.get_ref(), "math\n  PASS adds\n");
}

#[cfg(feature = "std")]
#[test]
fn test_io_reporter_writes_same_layout() {
    let mut reporter = crate::IoReporter::new(std::vec::Vec::new());
    reporter.suite_started("math");
    reporter.test_finished(
        "bad_add",
        &TestResult::Fail(AssertionFailure::new("2+2==5", "m.t", 10)),
    );
    reporter.suite_finished("math");

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out, "math\n  FAIL bad_add '2+2==5' (m.t:10)\n");
}

#[cfg(feature = "std")]
#[test]
fn test_stats_exit_code() {
    use std::process::ExitCode;

    let all_passed = TestStats {
        passed: 4,
        failed: 0,
    };
    let one_failed = TestStats {
        passed: 1,
        failed: 1,
    };

    assert_eq!(all_passed.exit_code(), ExitCode::SUCCESS);
    assert_eq!(one_failed.exit_code(), ExitCode::FAILURE);
    assert_eq!(TestStats::new().exit_code(), ExitCode::SUCCESS);
}
