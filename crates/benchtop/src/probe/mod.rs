//! Probe mode: classify a clicked element and resolve its explanation.

mod bundle;
mod class;
mod defaults;
mod panel;
mod resolver;

pub(crate) use bundle::deserialize_override;
pub use bundle::{ExplanationBundle, ProbeMeta, ProbeOverride};
pub use class::{
    classify, default_classifier, ClassMatch, KeywordRule, ProbeClass, ProbeClassifier,
    KEYWORD_RULES,
};
pub use defaults::{default_bundles, default_probe_by_class};
pub use panel::{
    PanelColumn, PanelConfig, PanelHeader, ProbePanel, ProbeSelection, SelectionState, NO_NOTES,
};
pub use resolver::{build_probe_info, ProbeRequest, ProbeResolver, OVERRIDE_ICON};
