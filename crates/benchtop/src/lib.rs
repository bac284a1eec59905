//! Benchtop: probe-mode explanations for interactive curriculum diagrams.
//!
//! When a learner clicks an element of a module diagram (a node of a circuit,
//! a branch of a fault tree), Benchtop decides what kind of thing was clicked
//! from its wording and returns a canned explanation: what to expect when
//! measuring it, clues that point at a fault, and what to try next.
//!
//! # Core Principles
//!
//! - **Ordered keywords**: the first matching keyword group wins, always
//! - **Total**: every click resolves to a complete explanation
//! - **Author first**: an element's own `probe` override replaces classification
//!
//! # Example
//!
//! ```
//! use benchtop::{build_probe_info, Element, Module, ProbeClass, ProbeRequest};
//!
//! let module = Module::new("blink").with_title("Blink an LED");
//! let element = Element::new("vcc").with_label("VCC");
//!
//! let bundle = build_probe_info(
//!     &ProbeRequest::new("node").with_module(&module).with_element(&element),
//! );
//!
//! assert_eq!(bundle.title, "VCC");
//! assert_eq!(bundle.meta.class, Some(ProbeClass::Rail));
//! ```

pub mod audit;
pub mod curriculum;
pub mod error;
pub mod probe;

mod benchtop;

pub use crate::benchtop::{Benchtop, BenchtopConfig, ProbeTarget};
pub use audit::{AuditFormat, AuditReport, AuditRow};
pub use curriculum::{Category, Curriculum, CurriculumIssue, CurriculumSource, Element, Module};
pub use error::{BenchtopError, Result};
pub use probe::{
    build_probe_info, classify, default_probe_by_class, ExplanationBundle, PanelConfig,
    ProbeClass, ProbeClassifier, ProbeMeta, ProbeOverride, ProbePanel, ProbeRequest,
    ProbeSelection, SelectionState,
};
