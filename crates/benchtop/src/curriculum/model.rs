//! Curriculum content: categories own modules, modules own diagram elements.

use serde::{Deserialize, Serialize};

use crate::error::{BenchtopError, Result};
use crate::probe::{deserialize_override, ProbeOverride};

use super::source::CurriculumSource;

/// A clickable item in a module diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Identifier, unique within its module.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fault descriptor (e.g. "open circuit on R3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
    /// Default element-type tag for this item (e.g. "node", "branch").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Author-supplied explanation that bypasses classification.
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub probe: Option<ProbeOverride>,
}

impl Element {
    /// Create an element with an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the fault descriptor.
    pub fn with_fault(mut self, fault: impl Into<String>) -> Self {
        self.fault = Some(fault.into());
        self
    }

    /// Set the element kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Attach an override bundle.
    pub fn with_probe(mut self, probe: ProbeOverride) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Label if present and non-empty.
    pub fn display_label(&self) -> Option<&str> {
        non_empty(self.label.as_deref())
    }
}

/// A lesson grouping diagram elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Module {
    /// Create an empty module.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append an element.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Find an element by id.
    pub fn element(&self, id: &str) -> Result<&Element> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| BenchtopError::UnknownElement {
                module: self.id.clone(),
                element: id.to_string(),
            })
    }
}

/// A subject area (e.g. "electronics", "git").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a module.
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Find a module by id.
    pub fn module(&self, id: &str) -> Result<&Module> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| BenchtopError::UnknownModule(id.to_string()))
    }
}

/// A complete curriculum file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Where this curriculum was loaded from. Not part of the file format.
    #[serde(skip)]
    pub source: Option<CurriculumSource>,
}

impl Curriculum {
    /// Create an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Find a category by id.
    pub fn category(&self, id: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| BenchtopError::UnknownCategory(id.to_string()))
    }

    /// Find a module anywhere in the curriculum, with its owning category.
    pub fn find_module(&self, id: &str) -> Result<(&Category, &Module)> {
        self.categories
            .iter()
            .find_map(|c| c.modules.iter().find(|m| m.id == id).map(|m| (c, m)))
            .ok_or_else(|| BenchtopError::UnknownModule(id.to_string()))
    }

    /// Iterate over every module with its category.
    pub fn modules(&self) -> impl Iterator<Item = (&Category, &Module)> {
        self.categories
            .iter()
            .flat_map(|c| c.modules.iter().map(move |m| (c, m)))
    }

    /// Iterate over every element with its category and module.
    pub fn elements(&self) -> impl Iterator<Item = (&Category, &Module, &Element)> {
        self.modules()
            .flat_map(|(c, m)| m.elements.iter().map(move |e| (c, m, e)))
    }

    /// Total number of modules.
    pub fn module_count(&self) -> usize {
        self.categories.iter().map(|c| c.modules.len()).sum()
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.modules().map(|(_, m)| m.elements.len()).sum()
    }
}

/// Treat `Some("")` the same as `None`.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
