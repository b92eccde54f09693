//! Memoized strategy: a bottom-up table of every F(i) up to F(n).
//!
//! The table is filled from the base cases upward, so the stack depth is
//! constant regardless of `n`. Slots carry an explicit populated marker
//! instead of treating zero as "not computed yet".

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::calculator::{CoreCalculator, FibError};
use crate::constants::{MEMO_TRACE_INTERVAL, MEMO_TRACE_WARMUP};
use crate::observer::ProgressObserver;
use crate::options::Options;
use crate::progress::ProgressUpdate;

const NAME: &str = "Recursive";

/// Table of Fibonacci values indexed by `i`, each slot unset until computed.
#[derive(Debug, Clone)]
pub struct MemoTable {
    slots: Vec<Option<BigUint>>,
}

impl MemoTable {
    /// Allocate a table of `len` unset slots.
    ///
    /// A refused reservation is reported as `ResourceExhausted` instead of aborting.
    pub fn with_len(len: usize) -> Result<Self, FibError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|e| {
            FibError::ResourceExhausted(format!("memo table of {len} slots: {e}"))
        })?;
        slots.resize(len, None);
        Ok(Self { slots })
    }

    /// Allocate a table large enough to compute F(n), i.e. `n + 1` slots.
    pub fn for_index(n: u64) -> Result<Self, FibError> {
        let len = usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                FibError::ResourceExhausted(format!(
                    "memo table for index {n} exceeds the address space"
                ))
            })?;
        Self::with_len(len)
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value at `i`, if it has been computed.
    #[must_use]
    pub fn get(&self, i: u64) -> Option<&BigUint> {
        let i = usize::try_from(i).ok()?;
        self.slots.get(i)?.as_ref()
    }

    /// Whether slot `i` holds a computed value.
    #[must_use]
    pub fn is_populated(&self, i: u64) -> bool {
        self.get(i).is_some()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Move the value at `i` out of the table.
    pub fn take(&mut self, i: u64) -> Option<BigUint> {
        let i = usize::try_from(i).ok()?;
        self.slots.get_mut(i)?.take()
    }

    fn check_capacity(&self, n: u64) -> Result<usize, FibError> {
        let len = self.len();
        match usize::try_from(n) {
            Ok(i) if i < len => Ok(i),
            _ => Err(FibError::OutOfRange { index: n, len }),
        }
    }
}

/// Whether table index `i` is a trace checkpoint.
#[must_use]
pub fn is_checkpoint(i: u64) -> bool {
    i <= MEMO_TRACE_WARMUP || i % MEMO_TRACE_INTERVAL == 0
}

/// Fill `table[0..=n]` bottom-up.
///
/// Returns `OutOfRange` if the table has fewer than `n + 1` slots.
pub fn fill_memo(
    n: u64,
    table: &mut MemoTable,
    observer: &dyn ProgressObserver,
    calc_index: usize,
) -> Result<(), FibError> {
    let last = table.check_capacity(n)?;

    table.slots[0] = Some(BigUint::zero());
    if last == 0 {
        return Ok(());
    }
    table.slots[1] = Some(BigUint::one());

    // F(i-2) and F(i-1), mirroring the two slots just written.
    let mut f2 = BigUint::zero();
    let mut f1 = BigUint::one();
    for i in 2..=last {
        let step = i as u64;
        if is_checkpoint(step) {
            observer.on_progress(&ProgressUpdate::at_step(calc_index, NAME, step, n));
        }
        let next = &f2 + &f1;
        table.slots[i] = Some(next.clone());
        f2 = std::mem::replace(&mut f1, next);
    }

    Ok(())
}

/// Compute F(n) using a caller-owned memo table.
///
/// The table stays the single source of truth: the returned value is a copy
/// of `table[n]`. Indices 0 and 1 are answered without touching the table.
pub fn memoized_fibonacci(
    n: u64,
    table: &mut MemoTable,
    observer: &dyn ProgressObserver,
    calc_index: usize,
) -> Result<BigUint, FibError> {
    match n {
        0 => return Ok(BigUint::zero()),
        1 => return Ok(BigUint::one()),
        _ => {}
    }

    fill_memo(n, table, observer, calc_index)?;
    table.get(n).cloned().ok_or(FibError::OutOfRange {
        index: n,
        len: table.len(),
    })
}

/// Memoized calculator; allocates and drops its own table per call.
pub struct MemoizedCalculator;

impl MemoizedCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MemoizedCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MemoizedCalculator {
    fn calculate_core(
        &self,
        observer: &dyn ProgressObserver,
        calc_index: usize,
        n: u64,
        opts: &Options,
    ) -> Result<BigUint, FibError> {
        match n {
            0 => return Ok(BigUint::zero()),
            1 => return Ok(BigUint::one()),
            _ => {}
        }

        let mut table = MemoTable::for_index(n)?;
        if opts.verbose {
            debug!(n, slots = table.len(), "Allocated memo table");
        }
        fill_memo(n, &mut table, observer, calc_index)?;
        table.take(n).ok_or(FibError::OutOfRange {
            index: n,
            len: table.len(),
        })
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Recursive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{ChannelObserver, NoOpObserver};

    fn fib(n: u64) -> BigUint {
        let mut table = MemoTable::for_index(n).unwrap();
        memoized_fibonacci(n, &mut table, &NoOpObserver::new(), 0).unwrap()
    }

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), BigUint::ZERO);
        assert_eq!(fib(1), BigUint::from(1u32));
    }

    #[test]
    fn known_values() {
        assert_eq!(fib(2), BigUint::from(1u32));
        assert_eq!(fib(10), BigUint::from(55u32));
        assert_eq!(fib(20), BigUint::from(6765u32));
        assert_eq!(fib(100).to_string(), "354224848179261915075");
    }

    #[test]
    fn table_holds_every_value() {
        let mut table = MemoTable::for_index(15).unwrap();
        let result = memoized_fibonacci(15, &mut table, &NoOpObserver::new(), 0).unwrap();
        assert_eq!(result, BigUint::from(610u32));
        assert_eq!(table.populated(), 16);
        assert_eq!(table.get(7), Some(&BigUint::from(13u32)));
        assert_eq!(table.get(15), Some(&result));
    }

    #[test]
    fn filled_slots_follow_recurrence() {
        let mut table = MemoTable::for_index(300).unwrap();
        fill_memo(300, &mut table, &NoOpObserver::new(), 0).unwrap();
        for i in 2..=300 {
            let expected = table.get(i - 1).unwrap() + table.get(i - 2).unwrap();
            assert_eq!(table.get(i), Some(&expected), "slot {i}");
        }
    }

    #[test]
    fn zero_slot_is_populated_not_sentinel() {
        let mut table = MemoTable::for_index(5).unwrap();
        assert!(!table.is_populated(0));
        fill_memo(5, &mut table, &NoOpObserver::new(), 0).unwrap();
        assert!(table.is_populated(0));
        assert_eq!(table.get(0), Some(&BigUint::ZERO));
    }

    #[test]
    fn undersized_table_is_rejected() {
        let mut table = MemoTable::with_len(10).unwrap();
        let result = memoized_fibonacci(10, &mut table, &NoOpObserver::new(), 0);
        assert!(matches!(
            result,
            Err(FibError::OutOfRange { index: 10, len: 10 })
        ));
        assert_eq!(table.populated(), 0);
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut table = MemoTable::with_len(0).unwrap();
        assert!(table.is_empty());
        let result = fill_memo(0, &mut table, &NoOpObserver::new(), 0);
        assert!(matches!(result, Err(FibError::OutOfRange { .. })));
    }

    #[test]
    fn base_cases_ignore_table_size() {
        let mut table = MemoTable::with_len(0).unwrap();
        let observer = NoOpObserver::new();
        assert_eq!(
            memoized_fibonacci(1, &mut table, &observer, 0).unwrap(),
            BigUint::from(1u32)
        );
    }

    #[test]
    fn oversized_table_is_fine() {
        let mut table = MemoTable::with_len(100).unwrap();
        let result = memoized_fibonacci(12, &mut table, &NoOpObserver::new(), 0).unwrap();
        assert_eq!(result, BigUint::from(144u32));
        assert!(!table.is_populated(13));
    }

    #[test]
    fn refused_reservation_is_resource_exhaustion() {
        let result = MemoTable::with_len(usize::MAX);
        assert!(matches!(result, Err(FibError::ResourceExhausted(_))));
    }

    #[test]
    fn checkpoints() {
        assert!(is_checkpoint(2));
        assert!(is_checkpoint(10));
        assert!(!is_checkpoint(11));
        assert!(is_checkpoint(300));
    }

    #[test]
    fn reports_checkpoints_to_observer() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = ChannelObserver::new(tx);
        let mut table = MemoTable::for_index(205).unwrap();
        memoized_fibonacci(205, &mut table, &observer, 0).unwrap();

        let steps: Vec<u64> = rx.try_iter().map(|u| u.current_step).collect();
        assert_eq!(steps, [2, 3, 4, 5, 6, 7, 8, 9, 10, 100, 200]);
    }

    #[test]
    fn calculator_matches_free_function() {
        let calc = MemoizedCalculator::new();
        let observer = NoOpObserver::new();
        let opts = Options::default();
        for n in [0, 1, 2, 50, 500] {
            assert_eq!(
                calc.calculate_core(&observer, 0, n, &opts).unwrap(),
                fib(n),
                "F({n})"
            );
        }
        assert_eq!(calc.algorithm(), Algorithm::Recursive);
    }
}
