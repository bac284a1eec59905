//! Property-based tests for the probe classifier and resolver.
//!
//! These tests use proptest to generate random inputs and verify that
//! classification and resolution keep their invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **Totality**: Every input yields exactly one class and a complete bundle
//! 2. **Determinism**: Same input always produces same output
//! 3. **Ordering**: Earlier keyword groups always win over later ones
//! 4. **Overrides**: Author content is never reclassified
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p benchtop --test property_tests
//!
//! PROPTEST_CASES=10000 cargo test -p benchtop --test property_tests
//! ```

use proptest::prelude::*;

use benchtop::{
    build_probe_info, classify, default_probe_by_class, Element, Module, ProbeClass,
    ProbeOverride, ProbeRequest,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate arbitrary ASCII strings (common case)
fn ascii_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-\\.\\s]{0,100}"
}

/// Generate strings that look like circuit labels
fn label_like() -> impl Strategy<Value = String> {
    prop_oneof![
        // Reference designators
        "[RCLQUDJ][0-9]{1,3}",
        // Net names
        "(VCC|VDD|GND|SDA|SCL|MISO|MOSI|TX|RX|PWM[0-9]|ADC[0-9])",
        // Free words
        "[A-Za-z ]{1,30}",
    ]
}

/// Generate completely random bytes (edge cases)
fn random_bytes() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 0..200)
        .prop_filter_map("valid UTF-8", |bytes| String::from_utf8(bytes).ok())
}

fn class_strategy() -> impl Strategy<Value = ProbeClass> {
    prop::sample::select(ProbeClass::ALL.to_vec())
}

// =============================================================================
// Classifier Properties
// =============================================================================

mod classifier_tests {
    use super::*;

    proptest! {
        /// Classification never panics and returns one of the eight classes.
        #[test]
        fn classify_is_total(input in random_bytes()) {
            let class = classify(&input);
            prop_assert!(ProbeClass::ALL.contains(&class));
        }

        /// Classification is deterministic.
        #[test]
        fn classify_is_deterministic(input in ascii_string()) {
            prop_assert_eq!(classify(&input), classify(&input));
        }

        /// Classification ignores case.
        #[test]
        fn classify_ignores_case(input in ascii_string()) {
            prop_assert_eq!(classify(&input.to_uppercase()), classify(&input.to_lowercase()));
        }

        /// Any text containing "gnd" is ground, whatever else it says.
        #[test]
        fn ground_always_wins(prefix in ascii_string(), suffix in ascii_string()) {
            let text = format!("{} GND {}", prefix, suffix);
            prop_assert_eq!(classify(&text), ProbeClass::Ground);
        }

        /// Rail keywords beat every later group.
        #[test]
        fn rail_beats_later_groups(
            later in prop_oneof![
                Just("pwm"), Just("adc"), Just("motor"), Just("i2c"), Just("float")
            ]
        ) {
            let text = format!("{} vcc", later);
            prop_assert_eq!(classify(&text), ProbeClass::Rail);
        }
    }
}

// =============================================================================
// Default Table Properties
// =============================================================================

mod default_table_tests {
    use super::*;

    proptest! {
        /// Every class has a complete default bundle.
        #[test]
        fn default_bundle_is_complete(class in class_strategy()) {
            let bundle = default_probe_by_class(class);
            prop_assert!(!bundle.icon.is_empty());
            prop_assert!(!bundle.title.is_empty());
            prop_assert!(!bundle.expect.is_empty());
            prop_assert!(!bundle.clues.is_empty());
            prop_assert!(!bundle.next.is_empty());
        }
    }
}

// =============================================================================
// Resolver Properties
// =============================================================================

mod resolver_tests {
    use super::*;

    proptest! {
        /// Without an override, meta.class equals classify(basis).
        #[test]
        fn meta_class_matches_classify(
            label in label_like(),
            id in "[a-z0-9]{1,8}",
            fault in proptest::option::of(ascii_string()),
            module_title in ascii_string(),
        ) {
            let module = Module::new("m").with_title(module_title);
            let mut element = Element::new(id).with_label(label);
            if let Some(fault) = fault {
                element = element.with_fault(fault);
            }
            let request = ProbeRequest::new("node").with_module(&module).with_element(&element);

            let bundle = build_probe_info(&request);
            prop_assert_eq!(bundle.meta.class, Some(classify(&request.classification_basis())));
            prop_assert!(!bundle.icon.is_empty());
            prop_assert!(!bundle.title.is_empty());
        }

        /// Resolution is idempotent.
        #[test]
        fn resolution_is_idempotent(label in label_like(), module_title in ascii_string()) {
            let module = Module::new("m").with_title(module_title);
            let element = Element::new("e").with_label(label);
            let request = ProbeRequest::new("node").with_module(&module).with_element(&element);
            prop_assert_eq!(build_probe_info(&request), build_probe_info(&request));
        }

        /// Overrides are returned verbatim and never classified.
        #[test]
        fn override_is_verbatim(
            title in "[A-Za-z]{1,20}",
            expect in prop::collection::vec(ascii_string(), 0..4),
            label in label_like(),
        ) {
            let probe = ProbeOverride::new()
                .with_title(title.clone())
                .with_expect(expect.clone());
            let element = Element::new("e").with_label(label).with_probe(probe);
            let bundle = build_probe_info(&ProbeRequest::new("node").with_element(&element));

            prop_assert_eq!(bundle.title, title);
            prop_assert_eq!(bundle.expect, expect);
            prop_assert!(bundle.clues.is_empty());
            prop_assert!(bundle.next.is_empty());
            prop_assert!(bundle.meta.class.is_none());
        }
    }
}
