//! Memory budget estimation and validation.

use num_bigint::BigUint;
use sysinfo::System;

use crate::algorithm::Algorithm;
use crate::calculator::FibError;
use crate::constants::LOG2_PHI;

/// Memory estimate for a Fibonacci computation.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Estimated memory for the result itself (in bytes).
    pub result_bytes: usize,
    /// Estimated memory for temporaries and tables (in bytes).
    pub temp_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Live matrix entries while multiplying: the base, the partial power,
    /// the product being built, plus one in-flight product per entry.
    const MATRIX_TEMP_FACTOR: usize = 8;

    /// Estimate memory usage for computing F(n) with `algorithm`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn estimate(algorithm: Algorithm, n: u64) -> Self {
        let result_bits = (n as f64 * LOG2_PHI).ceil() as usize;
        let result_bytes = result_bits.div_ceil(8);

        let temp_bytes = match algorithm {
            // a, b and the sum c
            Algorithm::Iterative => result_bytes.saturating_mul(2),
            // Every F(i) for i <= n is live at once: sum of i*log2(phi) bits.
            Algorithm::Recursive => {
                let nf = n as f64;
                let table_bits = LOG2_PHI * nf * (nf + 1.0) / 2.0;
                let table_bytes = (table_bits / 8.0).ceil() as usize;
                let slot_bytes = usize::try_from(n)
                    .unwrap_or(usize::MAX)
                    .saturating_add(1)
                    .saturating_mul(std::mem::size_of::<Option<BigUint>>());
                table_bytes.saturating_add(slot_bytes)
            }
            Algorithm::Matrix => result_bytes.saturating_mul(Self::MATRIX_TEMP_FACTOR),
        };

        Self {
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K", "100B").
///
/// An empty string means unlimited.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, FibError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| FibError::Config(format!("invalid memory limit {s:?}: {e}")))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| FibError::Config(format!("memory limit {s:?} is too large")))
}

/// Default budget when no limit is given: the memory the system reports as
/// available (capped by the cgroup's free memory, if any). `None` when the
/// platform reports nothing, which leaves the run unlimited.
#[must_use]
pub fn system_memory_limit() -> Option<usize> {
    let mut sys = System::new();
    sys.refresh_memory();
    let available = match sys.cgroup_limits() {
        Some(cgroup) if cgroup.free_memory > 0 => sys.available_memory().min(cgroup.free_memory),
        _ => sys.available_memory(),
    };
    limit_from_available(available)
}

fn limit_from_available(bytes: u64) -> Option<usize> {
    (bytes > 0).then(|| usize::try_from(bytes).unwrap_or(usize::MAX))
}

/// Resolve a `--memory-limit` value: an explicit size wins, an empty string
/// falls back to [`system_memory_limit`].
pub fn resolve_memory_limit(s: &str) -> Result<Option<usize>, FibError> {
    Ok(parse_memory_limit(s)?.or_else(system_memory_limit))
}
