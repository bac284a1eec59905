//! Hand-authored default explanation per probe class.

use once_cell::sync::Lazy;

use super::bundle::{ExplanationBundle, ProbeMeta};
use super::class::ProbeClass;

struct Template {
    icon: &'static str,
    title: &'static str,
    expect: &'static [&'static str],
    clues: &'static [&'static str],
    next: &'static [&'static str],
}

impl Template {
    fn to_bundle(&self, class: ProbeClass) -> ExplanationBundle {
        ExplanationBundle {
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            expect: owned(self.expect),
            clues: owned(self.clues),
            next: owned(self.next),
            meta: ProbeMeta {
                class: Some(class),
                ..ProbeMeta::default()
            },
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn template(class: ProbeClass) -> Template {
    match class {
        ProbeClass::Ground => Template {
            icon: "⏚",
            title: "Ground reference",
            expect: &[
                "0 V relative to the negative probe on any other ground point.",
                "Continuity (a few ohms at most) back to the supply return.",
            ],
            clues: &[
                "A few hundred mV between two grounds means return current is flowing through a bad joint.",
                "Noise that follows load changes points to a shared, undersized return path.",
            ],
            next: &[
                "Measure ground-to-ground across the board with the circuit powered.",
                "Reflow or re-crimp the joint with the largest offset.",
            ],
        },
        ProbeClass::Rail => Template {
            icon: "⚡",
            title: "Supply rail",
            expect: &[
                "The nominal rail voltage within about 5% (e.g. 3.3 V or 5 V).",
                "Little ripple when the load is steady.",
            ],
            clues: &[
                "A sagging rail under load suggests a weak regulator or too much series resistance.",
                "A rail at 0 V with the supply on means a blown fuse, open trace or short to ground.",
                "A hot regulator is a sign of excess current draw downstream.",
            ],
            next: &[
                "Measure at the regulator output, then at the load, and compare.",
                "Disconnect loads one at a time to find the one pulling the rail down.",
            ],
        },
        ProbeClass::Pwm => Template {
            icon: "〰",
            title: "PWM / timer signal",
            expect: &[
                "A square wave switching between 0 V and the logic high level.",
                "A multimeter shows roughly duty cycle times the high level.",
            ],
            clues: &[
                "A flat line at 0 V or high means the timer is not running or the pin is not in output mode.",
                "Rounded edges hint at excess capacitive load on the line.",
            ],
            next: &[
                "Check frequency and duty on a scope or logic analyser.",
                "Confirm the pin mux and timer configuration in firmware.",
            ],
        },
        ProbeClass::Analog => Template {
            icon: "📈",
            title: "Analog signal",
            expect: &[
                "A voltage between 0 V and the ADC reference that tracks the sensed quantity.",
                "A reading that changes smoothly when the input changes.",
            ],
            clues: &[
                "A value stuck at a rail points to a shorted or open sensor.",
                "Jumpy readings suggest noise coupling or a missing filter capacitor.",
            ],
            next: &[
                "Compare the meter reading with the raw ADC value in firmware.",
                "Check the reference voltage and any divider on the input.",
            ],
        },
        ProbeClass::Inductive => Template {
            icon: "🌀",
            title: "Inductive load",
            expect: &[
                "Supply voltage across the coil when driven, about 0 V when off.",
                "A short spike at turn-off, clamped by the flyback diode.",
            ],
            clues: &[
                "Resets or glitches when the load switches point to a missing flyback diode.",
                "A driver transistor that runs hot or fails may be seeing unclamped spikes.",
            ],
            next: &[
                "Verify the flyback diode orientation across the coil.",
                "Measure coil resistance with power off and compare to the datasheet.",
            ],
        },
        ProbeClass::Bus => Template {
            icon: "🔌",
            title: "Serial bus line",
            expect: &[
                "Idle at the logic high level, with bursts of activity during transfers.",
                "Clean edges between the defined logic levels.",
            ],
            clues: &[
                "A line held low usually means a stuck device or a missing pull-up.",
                "Garbled data points to mismatched baud rate, clock mode or bus speed.",
                "A slow rise time suggests pull-ups that are too weak for the bus capacitance.",
            ],
            next: &[
                "Capture the transfer with a logic analyser and decode it.",
                "Check pull-up values and that every device shares a common ground.",
            ],
        },
        ProbeClass::Floating => Template {
            icon: "❓",
            title: "Floating node",
            expect: &[
                "No defined voltage; the reading drifts and depends on what touches it.",
            ],
            clues: &[
                "Readings that change when you move your hand nearby mean the node is not driven.",
                "Random logic toggling on an input usually means it lacks a pull resistor.",
            ],
            next: &[
                "Add a pull-up or pull-down resistor, or enable the internal one.",
            ],
        },
        ProbeClass::Generic => Template {
            icon: "🔎",
            title: "Probe point",
            expect: &[
                "A reading consistent with what the schematic says this node does.",
            ],
            clues: &[
                "Compare against a known-good board or the expected value in the notes.",
            ],
            next: &[
                "Trace the node back to its source and measure along the way.",
            ],
        },
    }
}

static DEFAULT_BUNDLES: Lazy<Vec<ExplanationBundle>> = Lazy::new(|| {
    ProbeClass::ALL
        .into_iter()
        .map(|class| template(class).to_bundle(class))
        .collect()
});

/// The default explanation bundle for a class.
///
/// The returned bundle carries `meta.class`; every other meta field is empty.
pub fn default_probe_by_class(class: ProbeClass) -> &'static ExplanationBundle {
    let index = ProbeClass::ALL
        .iter()
        .position(|c| *c == class)
        .unwrap_or(ProbeClass::ALL.len() - 1);
    &DEFAULT_BUNDLES[index]
}

/// All default bundles, in classification order.
pub fn default_bundles() -> impl Iterator<Item = (ProbeClass, &'static ExplanationBundle)> {
    ProbeClass::ALL.into_iter().zip(DEFAULT_BUNDLES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_complete_bundle() {
        for (class, bundle) in default_bundles() {
            assert!(!bundle.icon.is_empty(), "{class} icon");
            assert!(!bundle.title.is_empty(), "{class} title");
            assert!((1..=3).contains(&bundle.expect.len()), "{class} expect");
            assert!((1..=3).contains(&bundle.clues.len()), "{class} clues");
            assert!((1..=2).contains(&bundle.next.len()), "{class} next");
            assert_eq!(bundle.meta.class, Some(class));
        }
    }

    #[test]
    fn test_lookup_matches_class() {
        assert_eq!(default_probe_by_class(ProbeClass::Ground).title, "Ground reference");
        assert_eq!(default_probe_by_class(ProbeClass::Generic).title, "Probe point");
    }

    #[test]
    fn test_titles_are_distinct() {
        let mut titles: Vec<&str> = default_bundles().map(|(_, b)| b.title.as_str()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), ProbeClass::ALL.len());
    }
}
