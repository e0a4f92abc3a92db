// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use picotest::{check, def_suite, def_test};

/// Number of bytes before the first NUL, or the whole string if there is none.
fn len(s: &str) -> usize {
    let mut len = 0;
    for b in s.bytes() {
        if b == 0 {
            break;
        }
        len += 1;
    }
    len
}

#[def_test]
fn returns_length_of_a_string() {
    check!(len("alfa") == 4);
    check!(len("bravo") == 5);
    check!(len("charlie") == 7);
}

#[def_test]
fn returns_length_of_an_empty_string() {
    check!(len("") == 0);
}

#[def_suite]
pub fn strlen() {
    run_test!(returns_length_of_a_string);
    run_test!(returns_length_of_an_empty_string);
}
