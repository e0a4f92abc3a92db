// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

use picotest::{check, check_eq, def_suite, def_test};

/// Reverse `arr` in place by swapping mirrored pairs up to the middle.
fn reverse_in_place(arr: &mut [i32]) {
    let len = arr.len();
    for i in 0..len / 2 {
        arr.swap(i, len - i - 1);
    }
}

#[def_test]
fn reverses_an_array_of_length_1() {
    let mut arr = [23];

    reverse_in_place(&mut arr);

    check_eq!(arr[0], 23);
}

#[def_test]
fn reverses_a_large_array() {
    const SIZE: i32 = 10;
    let mut arr: Vec<i32> = (0..SIZE).collect();

    reverse_in_place(&mut arr);

    for (i, value) in (0..SIZE).zip(&arr) {
        check!(*value == SIZE - 1 - i);
    }
}

#[def_suite]
pub fn reverse() {
    run_test!(reverses_an_array_of_length_1);
    run_test!(reverses_a_large_array);
}
