//! 2x2 matrix of `BigUint` values.

use std::ops::Mul;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::matrix_ops::matrix_multiply;

/// The matrix `[[a11, a12], [a21, a22]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a11: BigUint,
    pub a12: BigUint,
    pub a21: BigUint,
    pub a22: BigUint,
}

impl Matrix {
    /// Build a matrix from its entries in row-major order.
    #[must_use]
    pub fn new(a11: BigUint, a12: BigUint, a21: BigUint, a22: BigUint) -> Self {
        Self { a11, a12, a21, a22 }
    }

    /// Build a matrix from small entries in row-major order.
    #[must_use]
    pub fn from_u64(a11: u64, a12: u64, a21: u64, a22: u64) -> Self {
        Self::new(a11.into(), a12.into(), a21.into(), a22.into())
    }

    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(BigUint::one(), BigUint::zero(), BigUint::zero(), BigUint::one())
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self::new(BigUint::one(), BigUint::one(), BigUint::one(), BigUint::zero())
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.a11.is_one() && self.a12.is_zero() && self.a21.is_zero() && self.a22.is_one()
    }

    /// Whether `a12 == a21`. Every power of Q is symmetric.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.a12 == self.a21
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        matrix_multiply(self, rhs)
    }
}
