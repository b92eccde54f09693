//! Property-based tests for the core Fibonacci strategies.
//!
//! These tests exercise the CoreCalculator trait directly (without
//! the FibCalculator decorator base cases).

use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

use fib_core::calculator::CoreCalculator;
use fib_core::format::{format_result, OutputFormat};
use fib_core::iterative::IterativeCalculator;
use fib_core::matrix::MatrixExponentiation;
use fib_core::matrix_ops::{matrix_multiply, matrix_power};
use fib_core::matrix_types::Matrix;
use fib_core::memoized::{memoized_fibonacci, MemoTable, MemoizedCalculator};
use fib_core::observers::NoOpObserver;
use fib_core::options::Options;

fn compute_core(algo: &dyn CoreCalculator, n: u64) -> BigUint {
    let observer = NoOpObserver::new();
    let opts = Options::default();
    algo.calculate_core(&observer, 0, n, &opts).unwrap()
}

fn any_format() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Decimal),
        Just(OutputFormat::Hexadecimal),
        Just(OutputFormat::Binary),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// For random n, all three strategies agree.
    #[test]
    fn all_core_algorithms_agree(n in 0u64..3000) {
        let it = compute_core(&IterativeCalculator::new(), n);
        let memo = compute_core(&MemoizedCalculator::new(), n);
        let mx = compute_core(&MatrixExponentiation::new(), n);

        prop_assert_eq!(&it, &memo, "Iterative != Recursive at n={}", n);
        prop_assert_eq!(&it, &mx, "Iterative != Matrix at n={}", n);
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_addition_property(n in 0u64..2000) {
        let algo = MatrixExponentiation::new();
        let fn_val = compute_core(&algo, n);
        let fn1_val = compute_core(&algo, n + 1);
        let fn2_val = compute_core(&algo, n + 2);
        prop_assert_eq!(&fn_val + &fn1_val, fn2_val, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// Q^(a+b) == Q^a * Q^b.
    #[test]
    fn matrix_power_is_additive(a in 0u64..500, b in 0u64..500) {
        let q = Matrix::fibonacci_q();
        let combined = matrix_power(&q, a + b);
        let split = matrix_multiply(&matrix_power(&q, a), &matrix_power(&q, b));
        prop_assert_eq!(combined, split);
    }

    /// Every populated slot of a filled memo table equals F(i).
    #[test]
    fn memo_table_holds_prefix(n in 2u64..400) {
        let observer = NoOpObserver::new();
        let mut table = MemoTable::for_index(n).unwrap();
        let f_n = memoized_fibonacci(n, &mut table, &observer, 0).unwrap();

        prop_assert_eq!(table.get(n), Some(&f_n));
        prop_assert_eq!(table.populated() as u64, n + 1);
        for i in 2..=n {
            let expected = table.get(i - 1).unwrap() + table.get(i - 2).unwrap();
            prop_assert_eq!(table.get(i), Some(&expected));
        }
    }

    /// Unlabeled output parses back to the same value in its base.
    #[test]
    fn formatting_round_trips(n in 0u64..1500, format in any_format()) {
        let value = compute_core(&IterativeCalculator::new(), n);
        let digits = format_result(&value, format, false);
        let reparsed = BigUint::from_str_radix(&digits, format.radix()).unwrap();
        prop_assert_eq!(&reparsed, &value);

        let labeled = format_result(&value, format, true);
        prop_assert_eq!(labeled, format!("{}{}", format.prefix(), digits));
    }
}

#[test]
fn documented_scenarios() {
    let cases: [(u64, OutputFormat, &str); 6] = [
        (0, OutputFormat::Decimal, "0"),
        (1, OutputFormat::Decimal, "1"),
        (10, OutputFormat::Decimal, "55"),
        (10, OutputFormat::Hexadecimal, "37"),
        (10, OutputFormat::Binary, "110111"),
        (
            100,
            OutputFormat::Decimal,
            "354224848179261915075",
        ),
    ];

    let calculators: [&dyn CoreCalculator; 3] = [
        &IterativeCalculator::new(),
        &MemoizedCalculator::new(),
        &MatrixExponentiation::new(),
    ];

    for (n, format, expected) in cases {
        for calc in calculators {
            let value = compute_core(calc, n);
            assert_eq!(
                format_result(&value, format, false),
                expected,
                "{} F({n}) in {format}",
                calc.name()
            );
        }
    }
}

#[test]
fn f1000_has_209_digits() {
    let value = compute_core(&MatrixExponentiation::new(), 1000);
    let s = format_result(&value, OutputFormat::Decimal, false);
    assert_eq!(s.len(), 209);
    assert!(s.starts_with("434665576869374564356885276750406258025646605173717804024817"));
}
