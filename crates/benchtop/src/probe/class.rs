//! Keyword classification of element context text into probe classes.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BenchtopError;

/// Semantic category of a probed diagram element.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProbeClass {
    /// Ground / 0 V reference.
    Ground,
    /// Supply rail (VCC, VDD, 3.3 V, 5 V).
    Rail,
    /// PWM or timer-driven signal.
    Pwm,
    /// Analog input or sensor line.
    Analog,
    /// Motor, relay or other inductive load.
    Inductive,
    /// Serial bus line (I2C, SPI, UART).
    Bus,
    /// Floating / undriven input.
    Floating,
    /// Anything the keyword table does not recognise.
    #[default]
    Generic,
}

impl ProbeClass {
    /// Every class, in classification order.
    pub const ALL: [ProbeClass; 8] = [
        ProbeClass::Ground,
        ProbeClass::Rail,
        ProbeClass::Pwm,
        ProbeClass::Analog,
        ProbeClass::Inductive,
        ProbeClass::Bus,
        ProbeClass::Floating,
        ProbeClass::Generic,
    ];

    /// The lower-case tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeClass::Ground => "ground",
            ProbeClass::Rail => "rail",
            ProbeClass::Pwm => "pwm",
            ProbeClass::Analog => "analog",
            ProbeClass::Inductive => "inductive",
            ProbeClass::Bus => "bus",
            ProbeClass::Floating => "floating",
            ProbeClass::Generic => "generic",
        }
    }
}

impl fmt::Display for ProbeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbeClass {
    type Err = BenchtopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ProbeClass::ALL
            .into_iter()
            .find(|class| class.as_str() == wanted)
            .ok_or_else(|| BenchtopError::UnknownClass(s.to_string()))
    }
}

/// One ordered entry of the keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    /// Class assigned when the rule fires.
    pub class: ProbeClass,
    /// Substrings that trigger the rule anywhere in the lower-cased text.
    pub contains: &'static [&'static str],
    /// Values that trigger the rule only when they equal the whole trimmed text.
    pub exact: &'static [&'static str],
}

/// The keyword table. Order matters: the first matching rule wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        class: ProbeClass::Ground,
        contains: &["gnd", "ground"],
        exact: &["0v"],
    },
    KeywordRule {
        class: ProbeClass::Rail,
        contains: &["vcc", "rail", "3.3", "5v", "supply", "vdd"],
        exact: &[],
    },
    KeywordRule {
        class: ProbeClass::Pwm,
        contains: &["pwm", "duty", "timer"],
        exact: &[],
    },
    KeywordRule {
        class: ProbeClass::Analog,
        contains: &["adc", "analog", "vin", "sensor"],
        exact: &[],
    },
    KeywordRule {
        class: ProbeClass::Inductive,
        contains: &["motor", "relay", "coil", "induct"],
        exact: &[],
    },
    KeywordRule {
        class: ProbeClass::Bus,
        // "cs" also fires inside unrelated words; authors word content around this.
        contains: &["i2c", "spi", "uart", "serial", "sda", "scl", "cs"],
        exact: &[],
    },
    KeywordRule {
        class: ProbeClass::Floating,
        contains: &["float"],
        exact: &[],
    },
];

/// How a piece of text was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassMatch {
    /// Winning class.
    pub class: ProbeClass,
    /// The keyword that fired.
    pub keyword: &'static str,
    /// True when the keyword matched the whole trimmed text rather than a substring.
    pub exact: bool,
}

/// Ordered keyword classifier.
#[derive(Debug, Clone)]
pub struct ProbeClassifier {
    rules: Vec<KeywordRule>,
}

impl ProbeClassifier {
    /// Create a classifier using the built-in keyword table.
    pub fn new() -> Self {
        Self::with_rules(KEYWORD_RULES.to_vec())
    }

    /// Create a classifier with a custom ordered rule list.
    pub fn with_rules(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Classify text. Always returns a class; `Generic` when nothing matches.
    pub fn classify(&self, text: &str) -> ProbeClass {
        self.explain(text)
            .map(|m| m.class)
            .unwrap_or(ProbeClass::Generic)
    }

    /// Classify text and report which keyword decided it.
    ///
    /// Returns `None` when the text falls through to `Generic`.
    pub fn explain(&self, text: &str) -> Option<ClassMatch> {
        let lower = text.to_lowercase();
        let trimmed = lower.trim();

        for rule in &self.rules {
            if let Some(keyword) = rule.contains.iter().find(|k| lower.contains(*k)) {
                debug!(class = %rule.class, keyword, "probe text classified");
                return Some(ClassMatch {
                    class: rule.class,
                    keyword,
                    exact: false,
                });
            }
            if let Some(keyword) = rule.exact.iter().find(|k| trimmed == **k) {
                debug!(class = %rule.class, keyword, "probe text classified by exact match");
                return Some(ClassMatch {
                    class: rule.class,
                    keyword,
                    exact: true,
                });
            }
        }

        debug!("probe text fell through to generic");
        None
    }
}

impl Default for ProbeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_CLASSIFIER: Lazy<ProbeClassifier> = Lazy::new(ProbeClassifier::new);

/// Classify text with the built-in keyword table.
///
/// ```
/// use benchtop::{classify, ProbeClass};
///
/// assert_eq!(classify("GND rail"), ProbeClass::Ground);
/// assert_eq!(classify("I2C SDA"), ProbeClass::Bus);
/// assert_eq!(classify("random text"), ProbeClass::Generic);
/// ```
pub fn classify(text: &str) -> ProbeClass {
    DEFAULT_CLASSIFIER.classify(text)
}

/// The shared classifier behind [`classify`].
pub fn default_classifier() -> &'static ProbeClassifier {
    &DEFAULT_CLASSIFIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_wins_over_rail() {
        assert_eq!(classify("GND rail"), ProbeClass::Ground);
    }

    #[test]
    fn test_zero_volt_exact_match() {
        assert_eq!(classify("0V"), ProbeClass::Ground);
        assert_eq!(classify("  0v \n"), ProbeClass::Ground);
    }

    #[test]
    fn test_zero_volt_inside_text_is_not_ground() {
        // "10v" contains "0v" but the rule needs the whole trimmed text
        assert_eq!(classify("10v"), ProbeClass::Generic);
    }

    #[test]
    fn test_bus_keywords() {
        assert_eq!(classify("I2C SDA"), ProbeClass::Bus);
        assert_eq!(classify("uart tx"), ProbeClass::Bus);
        assert_eq!(classify("chip select CS"), ProbeClass::Bus);
    }

    #[test]
    fn test_cs_substring_tolerance() {
        // "physics" contains "cs"; accepted false positive
        assert_eq!(classify("physics"), ProbeClass::Bus);
    }

    #[test]
    fn test_each_class_reachable() {
        assert_eq!(classify("VCC"), ProbeClass::Rail);
        assert_eq!(classify("3.3V line"), ProbeClass::Rail);
        assert_eq!(classify("duty cycle"), ProbeClass::Pwm);
        assert_eq!(classify("temp sensor"), ProbeClass::Analog);
        assert_eq!(classify("relay driver"), ProbeClass::Inductive);
        assert_eq!(classify("floating input"), ProbeClass::Floating);
        assert_eq!(classify("random text"), ProbeClass::Generic);
        assert_eq!(classify(""), ProbeClass::Generic);
    }

    #[test]
    fn test_order_pwm_before_analog() {
        assert_eq!(classify("pwm into adc"), ProbeClass::Pwm);
    }

    #[test]
    fn test_order_ground_before_pwm() {
        assert_eq!(classify("pwm gnd return"), ProbeClass::Ground);
    }

    #[test]
    fn test_explain_reports_keyword() {
        let classifier = ProbeClassifier::new();
        let m = classifier.explain("Motor coil").unwrap();
        assert_eq!(m.class, ProbeClass::Inductive);
        assert_eq!(m.keyword, "motor");
        assert!(!m.exact);

        let m = classifier.explain("0V").unwrap();
        assert_eq!(m.keyword, "0v");
        assert!(m.exact);

        assert!(classifier.explain("nothing here").is_none());
    }

    #[test]
    fn test_class_round_trips_through_str() {
        for class in ProbeClass::ALL {
            assert_eq!(class.as_str().parse::<ProbeClass>().unwrap(), class);
        }
        assert!("Pwm".parse::<ProbeClass>().is_ok());
        assert!("zener".parse::<ProbeClass>().is_err());
    }

    #[test]
    fn test_custom_rules() {
        let classifier = ProbeClassifier::with_rules(vec![KeywordRule {
            class: ProbeClass::Floating,
            contains: &["hi-z"],
            exact: &[],
        }]);
        assert_eq!(classifier.classify("Hi-Z pin"), ProbeClass::Floating);
        assert_eq!(classifier.classify("GND"), ProbeClass::Generic);
    }
}
