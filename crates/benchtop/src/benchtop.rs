//! Main Benchtop struct and public API.

use std::path::Path;

use tracing::{debug, warn};

use crate::audit::AuditReport;
use crate::curriculum::{Curriculum, CurriculumIssue};
use crate::error::{BenchtopError, Result};
use crate::probe::{
    PanelConfig, ProbeClassifier, ProbePanel, ProbeRequest, ProbeResolver, ProbeSelection,
};

/// Configuration for a Benchtop session.
#[derive(Debug, Clone)]
pub struct BenchtopConfig {
    /// Panel rendering options.
    pub panel: PanelConfig,
    /// Element type used when neither the caller nor the element names one.
    pub default_element_type: String,
    /// Refuse curricula that fail validation.
    pub strict_validation: bool,
}

impl Default for BenchtopConfig {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            default_element_type: "node".to_string(),
            strict_validation: false,
        }
    }
}

impl BenchtopConfig {
    pub fn with_panel(mut self, panel: PanelConfig) -> Self {
        self.panel = panel;
        self
    }

    pub fn with_default_element_type(mut self, element_type: impl Into<String>) -> Self {
        self.default_element_type = element_type.into();
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }
}

/// Identifies one click in a curriculum.
#[derive(Debug, Clone, Default)]
pub struct ProbeTarget {
    pub module_id: String,
    /// Element to probe; `None` probes the module as a whole.
    pub element_id: Option<String>,
    /// Category to report in meta; defaults to the module's owning category.
    pub category_id: Option<String>,
    pub element_type: Option<String>,
}

impl ProbeTarget {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ..Self::default()
        }
    }

    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_element_type(mut self, element_type: impl Into<String>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }
}

/// A loaded curriculum with a classifier and configuration.
pub struct Benchtop {
    config: BenchtopConfig,
    classifier: ProbeClassifier,
    curriculum: Curriculum,
}

impl Benchtop {
    /// Wrap an in-memory curriculum with default configuration.
    pub fn new(curriculum: Curriculum) -> Result<Self> {
        Self::with_config(curriculum, BenchtopConfig::default())
    }

    /// Wrap an in-memory curriculum with custom configuration.
    pub fn with_config(curriculum: Curriculum, config: BenchtopConfig) -> Result<Self> {
        let issues = curriculum.validate();
        if !issues.is_empty() {
            if config.strict_validation {
                let joined: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
                return Err(BenchtopError::InvalidCurriculum(joined.join("; ")));
            }
            for issue in &issues {
                warn!(%issue, "curriculum issue");
            }
        }

        Ok(Self {
            config,
            classifier: ProbeClassifier::new(),
            curriculum,
        })
    }

    /// Load a curriculum file with default configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(Curriculum::load(path)?)
    }

    /// Load a curriculum file with custom configuration.
    pub fn open_with_config(path: impl AsRef<Path>, config: BenchtopConfig) -> Result<Self> {
        Self::with_config(Curriculum::load(path)?, config)
    }

    /// Replace the classifier (e.g. with a custom rule list).
    pub fn with_classifier(mut self, classifier: ProbeClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &BenchtopConfig {
        &self.config
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn classifier(&self) -> &ProbeClassifier {
        &self.classifier
    }

    /// Structural issues in the loaded curriculum.
    pub fn issues(&self) -> Vec<CurriculumIssue> {
        self.curriculum.validate()
    }

    /// Resolve the selection for a click.
    pub fn probe(&self, target: &ProbeTarget) -> Result<ProbeSelection> {
        let (owner, module) = self.curriculum.find_module(&target.module_id)?;
        let category = match target.category_id.as_deref() {
            Some(id) => self.curriculum.category(id)?,
            None => owner,
        };
        let element = target
            .element_id
            .as_deref()
            .map(|id| module.element(id))
            .transpose()?;

        let element_type = target
            .element_type
            .as_deref()
            .or_else(|| element.and_then(|e| e.kind.as_deref()))
            .unwrap_or(self.config.default_element_type.as_str());

        let mut request = ProbeRequest::new(element_type)
            .with_category(category)
            .with_module(module);
        if let Some(element) = element {
            request = request.with_element(element);
        }

        debug!(module = %module.id, element = ?target.element_id, "probing");
        let bundle = ProbeResolver::new(&self.classifier).resolve(&request);
        Ok(ProbeSelection::new(bundle, element_type, element.cloned()))
    }

    /// Resolve a click and build its panel.
    pub fn panel(&self, target: &ProbeTarget) -> Result<ProbePanel> {
        let selection = self.probe(target)?;
        Ok(ProbePanel::from_selection(&selection, &self.config.panel))
    }

    /// Audit every element of the curriculum.
    pub fn audit(&self) -> AuditReport {
        AuditReport::build_with_element_type(
            &self.curriculum,
            &self.classifier,
            &self.config.default_element_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{Category, Element, Module};
    use crate::probe::ProbeClass;

    fn curriculum() -> Curriculum {
        Curriculum::new()
            .with_category(
                Category::new("electronics").with_module(
                    Module::new("motors")
                        .with_title("DC motor basics")
                        .with_element(
                            Element::new("q1").with_label("Q1 driver").with_kind("branch"),
                        )
                        .with_element(Element::new("n1").with_label("Node 1")),
                ),
            )
            .with_category(Category::new("git"))
    }

    #[test]
    fn test_probe_element() {
        let bench = Benchtop::new(curriculum()).unwrap();
        let selection = bench
            .probe(&ProbeTarget::new("motors").with_element("n1"))
            .unwrap();
        assert_eq!(selection.bundle.title, "Node 1");
        assert_eq!(selection.bundle.meta.class, Some(ProbeClass::Inductive));
        assert_eq!(selection.element_type, "node");
        assert_eq!(selection.bundle.meta.category_id.as_deref(), Some("electronics"));
    }

    #[test]
    fn test_element_kind_is_default_type() {
        let bench = Benchtop::new(curriculum()).unwrap();
        let selection = bench
            .probe(&ProbeTarget::new("motors").with_element("q1"))
            .unwrap();
        assert_eq!(selection.element_type, "branch");

        let selection = bench
            .probe(&ProbeTarget::new("motors").with_element("q1").with_element_type("node"))
            .unwrap();
        assert_eq!(selection.element_type, "node");
    }

    #[test]
    fn test_category_override() {
        let bench = Benchtop::new(curriculum()).unwrap();
        let selection = bench
            .probe(&ProbeTarget::new("motors").with_category("git"))
            .unwrap();
        assert_eq!(selection.bundle.meta.category_id.as_deref(), Some("git"));
        assert!(selection.element.is_none());
    }

    #[test]
    fn test_unknown_targets() {
        let bench = Benchtop::new(curriculum()).unwrap();
        assert!(matches!(
            bench.probe(&ProbeTarget::new("nope")),
            Err(BenchtopError::UnknownModule(_))
        ));
        assert!(matches!(
            bench.probe(&ProbeTarget::new("motors").with_element("zz")),
            Err(BenchtopError::UnknownElement { .. })
        ));
        assert!(matches!(
            bench.probe(&ProbeTarget::new("motors").with_category("zz")),
            Err(BenchtopError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_strict_validation() {
        let dup = Curriculum::new().with_category(
            Category::new("c").with_module(
                Module::new("m")
                    .with_element(Element::new("a"))
                    .with_element(Element::new("a")),
            ),
        );
        assert!(Benchtop::new(dup.clone()).is_ok());
        let strict = BenchtopConfig::default().with_strict_validation(true);
        assert!(matches!(
            Benchtop::with_config(dup, strict),
            Err(BenchtopError::InvalidCurriculum(_))
        ));
    }

    #[test]
    fn test_audit_uses_configured_element_type() {
        let config = BenchtopConfig::default().with_default_element_type("wire");
        let bench = Benchtop::with_config(curriculum(), config).unwrap();
        let report = bench.audit();
        assert_eq!(report.rows[0].element_type, "branch");
        assert_eq!(report.rows[1].element_type, "wire");

        let selection = bench
            .probe(&ProbeTarget::new("motors").with_element("n1"))
            .unwrap();
        assert_eq!(selection.element_type, report.rows[1].element_type);
    }

    #[test]
    fn test_panel_for_target() {
        let bench = Benchtop::new(curriculum()).unwrap();
        let panel = bench
            .panel(&ProbeTarget::new("motors").with_element("n1"))
            .unwrap();
        assert_eq!(panel.header.title, "Node 1");
        assert!(panel.footer_tip.is_some());
    }
}
