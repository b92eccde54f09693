#![no_main]

use libfuzzer_sys::fuzz_target;

use fib_core::matrix_ops::{matrix_multiply, matrix_power, matrix_power_by_squaring};
use fib_core::matrix_types::Matrix;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Small entries and exponents keep the products cheap
    let base = Matrix::from_u64(
        u64::from(data[0]),
        u64::from(data[1]),
        u64::from(data[2]),
        u64::from(data[3]),
    );
    let a = u64::from(u16::from_le_bytes([data[4], data[5]])) % 300;
    let b = u64::from(u16::from_le_bytes([data[6], data[7]])) % 300;

    let combined = matrix_power(&base, a + b);
    assert_eq!(
        combined,
        matrix_multiply(&matrix_power(&base, a), &matrix_power(&base, b)),
        "power({a}+{b}) != power({a}) * power({b})"
    );
    assert_eq!(combined, matrix_power_by_squaring(&base, a + b));
});
