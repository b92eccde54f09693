#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use num_traits::Num;

use fib_core::format::{format_result, OutputFormat};

fuzz_target!(|data: &[u8]| {
    let value = BigUint::from_bytes_be(data);
    for format in OutputFormat::ALL {
        let digits = format_result(&value, format, false);
        let reparsed = BigUint::from_str_radix(&digits, format.radix()).expect("valid digits");
        assert_eq!(reparsed, value, "{format} round trip");
        assert_eq!(
            format_result(&value, format, true),
            format!("{}{digits}", format.prefix())
        );
    }
});
