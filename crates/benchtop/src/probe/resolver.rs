//! Resolve the explanation bundle for a clicked element.

use tracing::debug;

use crate::curriculum::{non_empty, Category, Element, Module};

use super::bundle::{ExplanationBundle, ProbeMeta, ProbeOverride};
use super::class::{default_classifier, ProbeClass, ProbeClassifier};
use super::defaults::default_probe_by_class;

/// Icon used when an override does not supply one.
pub const OVERRIDE_ICON: &str = "🧪";

/// Everything the resolver needs to know about a click.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeRequest<'a> {
    pub module: Option<&'a Module>,
    pub category: Option<&'a Category>,
    /// Kind of diagram node clicked (e.g. "node", "branch").
    pub element_type: &'a str,
    pub element: Option<&'a Element>,
}

impl<'a> ProbeRequest<'a> {
    /// Request for an element type with no context yet.
    pub fn new(element_type: &'a str) -> Self {
        Self {
            element_type,
            ..Self::default()
        }
    }

    pub fn with_module(mut self, module: &'a Module) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_category(mut self, category: &'a Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_element(mut self, element: &'a Element) -> Self {
        self.element = Some(element);
        self
    }

    /// The text the classifier sees: label, id, fault, module id, module title.
    ///
    /// Missing fields contribute an empty string, so the basis always has
    /// exactly four separating spaces.
    pub fn classification_basis(&self) -> String {
        let element = self.element;
        let module = self.module;
        [
            element.and_then(|e| e.label.as_deref()),
            element.map(|e| e.id.as_str()),
            element.and_then(|e| e.fault.as_deref()),
            module.map(|m| m.id.as_str()),
            module.and_then(|m| m.title.as_deref()),
        ]
        .iter()
        .map(|part| part.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Build the probe bundle using the built-in classifier.
pub fn build_probe_info(request: &ProbeRequest<'_>) -> ExplanationBundle {
    ProbeResolver::new(default_classifier()).resolve(request)
}

/// Resolves bundles with a given classifier.
#[derive(Debug, Clone, Copy)]
pub struct ProbeResolver<'c> {
    classifier: &'c ProbeClassifier,
}

impl<'c> ProbeResolver<'c> {
    pub fn new(classifier: &'c ProbeClassifier) -> Self {
        Self { classifier }
    }

    /// Resolve a request. Never fails; always returns a bundle with an icon and title.
    pub fn resolve(&self, request: &ProbeRequest<'_>) -> ExplanationBundle {
        match request.element.and_then(|e| e.probe.as_ref()) {
            Some(probe) => Self::from_override(request, probe),
            None => self.from_classification(request),
        }
    }

    fn from_override(request: &ProbeRequest<'_>, probe: &ProbeOverride) -> ExplanationBundle {
        let element = request.element;
        let title = non_empty(probe.title.as_deref())
            .or_else(|| element.and_then(|e| non_empty(e.label.as_deref())))
            .or_else(|| element.and_then(|e| non_empty(e.fault.as_deref())))
            .or_else(|| request.module.and_then(|m| non_empty(m.title.as_deref())))
            .unwrap_or(default_probe_by_class(ProbeClass::Generic).title.as_str());

        debug!(
            element = element.map(|e| e.id.as_str()).unwrap_or(""),
            "probe resolved from author override"
        );

        ExplanationBundle {
            icon: non_empty(probe.icon.as_deref())
                .unwrap_or(OVERRIDE_ICON)
                .to_string(),
            title: title.to_string(),
            expect: probe.expect.clone().unwrap_or_default(),
            clues: probe.clues.clone().unwrap_or_default(),
            next: probe.next.clone().unwrap_or_default(),
            meta: probe.meta.clone().unwrap_or_default(),
        }
    }

    fn from_classification(&self, request: &ProbeRequest<'_>) -> ExplanationBundle {
        let basis = request.classification_basis();
        let class = self.classifier.classify(&basis);
        let template = default_probe_by_class(class);

        let element = request.element;
        let title = element
            .and_then(|e| non_empty(e.label.as_deref()))
            .or_else(|| element.and_then(|e| non_empty(e.fault.as_deref())))
            .unwrap_or(template.title.as_str());

        debug!(%class, basis = %basis, "probe resolved from classification");

        ExplanationBundle {
            icon: template.icon.clone(),
            title: title.to_string(),
            expect: template.expect.clone(),
            clues: template.clues.clone(),
            next: template.next.clone(),
            meta: ProbeMeta {
                class: Some(class),
                element_type: Some(request.element_type.to_string()),
                module_id: request.module.map(|m| m.id.clone()),
                category_id: request.category.map(|c| c.id.clone()),
                ..ProbeMeta::default()
            },
        }
    }
}
