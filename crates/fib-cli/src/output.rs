//! CLI output formatting.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;

use fib_core::format::{format_result, OutputFormat};

/// Format the result line for F(n).
///
/// Labeled lines read `Fibonacci Number {n} ({format}): {prefix}{digits}`;
/// raw lines are the digits alone.
#[must_use]
pub fn format_result_line(n: u64, value: &BigUint, format: OutputFormat, raw: bool) -> String {
    if raw {
        return format_result(value, format, false);
    }
    format!(
        "Fibonacci Number {n} ({}): {}",
        format.long_name(),
        format_result(value, format, true)
    )
}

/// Format the timing line.
#[must_use]
pub fn format_time_line(d: Duration) -> String {
    format!("Calculation Time: {:.6} seconds", d.as_secs_f64())
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write `line` and a trailing newline to `path`, replacing any existing
/// contents. On Unix a newly created file is readable and writable by the
/// owner only.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, line: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    writeln!(file, "{line}")?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_line_labeled() {
        let v = BigUint::from(55u32);
        assert_eq!(
            format_result_line(10, &v, OutputFormat::Decimal, false),
            "Fibonacci Number 10 (decimal): 55"
        );
        assert_eq!(
            format_result_line(10, &v, OutputFormat::Hexadecimal, false),
            "Fibonacci Number 10 (hexadecimal): 0x37"
        );
        assert_eq!(
            format_result_line(10, &v, OutputFormat::Binary, false),
            "Fibonacci Number 10 (binary): 0b110111"
        );
    }

    #[test]
    fn result_line_raw() {
        let v = BigUint::from(6765u32);
        assert_eq!(format_result_line(20, &v, OutputFormat::Decimal, true), "6765");
        assert_eq!(format_result_line(20, &v, OutputFormat::Hexadecimal, true), "1a6d");
    }

    #[test]
    fn time_line_has_six_decimals() {
        assert_eq!(
            format_time_line(Duration::from_micros(1_500)),
            "Calculation Time: 0.001500 seconds"
        );
        assert_eq!(
            format_time_line(Duration::ZERO),
            "Calculation Time: 0.000000 seconds"
        );
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert_eq!(format_duration(Duration::from_secs(3)), "3.000s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn write_to_file_appends_newline_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        write_to_file(&path, "a much longer first line").unwrap();
        write_to_file(&path, "55").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "55\n");
    }

    #[cfg(unix)]
    #[test]
    fn write_to_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        write_to_file(&path, "55").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("f.txt");
        assert!(write_to_file(&path, "55").is_err());
    }
}
