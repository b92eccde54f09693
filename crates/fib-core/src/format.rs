//! Rendering results in decimal, hexadecimal or binary.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::FibError;

/// Base in which a result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hexadecimal,
    Binary,
}

impl OutputFormat {
    /// Every format.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Decimal,
        OutputFormat::Hexadecimal,
        OutputFormat::Binary,
    ];

    /// Numeric base of the digit string.
    #[must_use]
    pub fn radix(self) -> u32 {
        match self {
            OutputFormat::Decimal => 10,
            OutputFormat::Hexadecimal => 16,
            OutputFormat::Binary => 2,
        }
    }

    /// Marker prepended to labeled output.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            OutputFormat::Decimal => "",
            OutputFormat::Hexadecimal => "0x",
            OutputFormat::Binary => "0b",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            OutputFormat::Decimal => "dec",
            OutputFormat::Hexadecimal => "hex",
            OutputFormat::Binary => "bin",
        }
    }

    /// Long name used in labeled output.
    #[must_use]
    pub fn long_name(self) -> &'static str {
        match self {
            OutputFormat::Decimal => "decimal",
            OutputFormat::Hexadecimal => "hexadecimal",
            OutputFormat::Binary => "binary",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for OutputFormat {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" | "decimal" => Ok(OutputFormat::Decimal),
            "hex" | "hexadecimal" => Ok(OutputFormat::Hexadecimal),
            "bin" | "binary" => Ok(OutputFormat::Binary),
            other => Err(FibError::Config(format!(
                "unknown format: {other} (expected dec, hex or bin)"
            ))),
        }
    }
}

/// Render `value` in `format`, digits only.
///
/// Hexadecimal digits are lowercase.
///
/// # Example
/// ```
/// use fib_core::format::{format_digits, OutputFormat};
/// use num_bigint::BigUint;
///
/// let f10 = BigUint::from(55u32);
/// assert_eq!(format_digits(&f10, OutputFormat::Decimal), "55");
/// assert_eq!(format_digits(&f10, OutputFormat::Hexadecimal), "37");
/// assert_eq!(format_digits(&f10, OutputFormat::Binary), "110111");
/// ```
#[must_use]
pub fn format_digits(value: &BigUint, format: OutputFormat) -> String {
    let digits = value.to_str_radix(format.radix());
    debug!(
        base = format.radix(),
        digits = digits.len(),
        "Converted result to {} format",
        format.long_name()
    );
    digits
}

/// Render `value` in `format`, with the base prefix when `labeled`.
#[must_use]
pub fn format_result(value: &BigUint, format: OutputFormat, labeled: bool) -> String {
    let digits = format_digits(value, format);
    if labeled {
        format!("{}{digits}", format.prefix())
    } else {
        digits
    }
}
