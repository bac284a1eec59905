//! Fuzz target for the probe classifier.
//!
//! This fuzzer tests that classification:
//! 1. Never panics on any UTF-8 input
//! 2. Agrees with the explaining classifier
//! 3. Always yields a complete default bundle

#![no_main]

use benchtop::{classify, default_probe_by_class, ProbeClass, ProbeClassifier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);
    let class = classify(&lossy);

    let explained = ProbeClassifier::new()
        .explain(&lossy)
        .map(|m| m.class)
        .unwrap_or(ProbeClass::Generic);
    assert_eq!(class, explained);

    let bundle = default_probe_by_class(class);
    assert!(!bundle.title.is_empty());
});
