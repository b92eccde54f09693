//! Matrix product and binary exponentiation.

use num_integer::Integer;

use crate::matrix_types::Matrix;

/// Multiply two 2x2 matrices.
///
/// Each entry is a sum of two products. The result is always a fresh
/// matrix, so the operands may be the same matrix.
#[must_use]
pub fn matrix_multiply(a: &Matrix, b: &Matrix) -> Matrix {
    Matrix {
        a11: &a.a11 * &b.a11 + &a.a12 * &b.a21,
        a12: &a.a11 * &b.a12 + &a.a12 * &b.a22,
        a21: &a.a21 * &b.a11 + &a.a22 * &b.a21,
        a22: &a.a21 * &b.a12 + &a.a22 * &b.a22,
    }
}

/// Square a 2x2 matrix.
#[must_use]
pub fn matrix_square(m: &Matrix) -> Matrix {
    matrix_multiply(m, m)
}

/// Raise `base` to the power `n` by recursive halving.
///
/// - `n == 0`: identity
/// - `n == 1`: `base`
/// - even `n`: `H * H` with `H = base^(n/2)`
/// - odd `n`: `base * base^(n-1)`
///
/// Recursion depth is at most `2 * log2(n) + 1`.
#[must_use]
pub fn matrix_power(base: &Matrix, n: u64) -> Matrix {
    matrix_power_with(base, n, &mut |_, _| {})
}

/// Like [`matrix_power`], calling `on_call(calls, exponent)` on entry to every
/// recursive call, where `calls` is the running call count.
pub fn matrix_power_with(base: &Matrix, n: u64, on_call: &mut dyn FnMut(u64, u64)) -> Matrix {
    let mut calls = 0;
    power_rec(base, n, &mut calls, on_call)
}

fn power_rec(base: &Matrix, n: u64, calls: &mut u64, on_call: &mut dyn FnMut(u64, u64)) -> Matrix {
    *calls += 1;
    on_call(*calls, n);

    match n {
        0 => Matrix::identity(),
        1 => base.clone(),
        _ if n.is_even() => {
            let half = power_rec(base, n / 2, calls, on_call);
            matrix_square(&half)
        }
        _ => {
            let rest = power_rec(base, n - 1, calls, on_call);
            matrix_multiply(base, &rest)
        }
    }
}

/// Raise `base` to the power `n` with a left-to-right square-and-multiply loop.
///
/// Same result as [`matrix_power`] without recursion.
#[must_use]
pub fn matrix_power_by_squaring(base: &Matrix, n: u64) -> Matrix {
    let num_bits = 64 - n.leading_zeros();
    let mut result = Matrix::identity();

    for i in (0..num_bits).rev() {
        result = matrix_square(&result);
        if (n >> i) & 1 == 1 {
            result = matrix_multiply(&result, base);
        }
    }

    result
}

/// Count the calls `matrix_power` makes for exponent `n`.
#[must_use]
pub fn power_call_count(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ if n.is_even() => 1 + power_call_count(n / 2),
        _ => 1 + power_call_count(n - 1),
    }
}
