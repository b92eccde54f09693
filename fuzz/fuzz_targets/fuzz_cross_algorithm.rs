#![no_main]

use libfuzzer_sys::fuzz_target;

use fib_core::algorithm::Algorithm;
use fib_core::observers::NoOpObserver;
use fib_core::options::Options;
use fib_core::registry::DefaultFactory;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use first 2 bytes as n, capped at 5000 for speed (the memo table is quadratic)
    let n = u64::from(u16::from_le_bytes([data[0], data[1]])) % 5_000;

    let factory = DefaultFactory::new();
    let observer = NoOpObserver::new();
    let opts = Options::default().normalize();

    let results: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&a| factory.for_algorithm(a).calculate(&observer, 0, n, &opts))
        .collect();

    let iter = results[0].as_ref().expect("iterative never fails without a limit");
    for (algorithm, result) in Algorithm::ALL.iter().zip(&results).skip(1) {
        let value = result.as_ref().expect("no memory limit is set");
        assert_eq!(iter, value, "Iterative != {algorithm} at n={n}");
    }
});
