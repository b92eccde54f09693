//! The selectable Fibonacci strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::FibError;

/// Strategy used to compute F(n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Running pair of accumulators, O(n) additions, O(1) bignums.
    Iterative,
    /// Bottom-up memo table, O(n) additions, O(n) bignums.
    Recursive,
    /// Binary exponentiation of `[[1,1],[1,0]]`, O(log n) matrix products.
    Matrix,
}

impl Algorithm {
    /// Every strategy, in registry order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Iterative, Algorithm::Recursive, Algorithm::Matrix];

    /// Short name used on the command line.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Iterative => "iter",
            Algorithm::Recursive => "recur",
            Algorithm::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iter" | "iterative" => Ok(Algorithm::Iterative),
            "recur" | "recursive" | "memo" => Ok(Algorithm::Recursive),
            "matrix" => Ok(Algorithm::Matrix),
            other => Err(FibError::Config(format!(
                "unknown algorithm: {other} (expected iter, recur or matrix)"
            ))),
        }
    }
}
