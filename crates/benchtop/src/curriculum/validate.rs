//! Structural checks for authored curriculum content.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::model::Curriculum;

/// A structural problem in a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurriculumIssue {
    /// Two categories share an id.
    DuplicateCategory { category: String },
    /// A category has an empty id.
    EmptyCategoryId { index: usize },
    /// Two modules share an id anywhere in the curriculum.
    DuplicateModule { category: String, module: String },
    /// A module has an empty id.
    EmptyModuleId { category: String, index: usize },
    /// Two elements share an id within one module.
    DuplicateElement { module: String, element: String },
    /// An element has an empty id.
    EmptyElementId { module: String, index: usize },
}

impl fmt::Display for CurriculumIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurriculumIssue::DuplicateCategory { category } => {
                write!(f, "duplicate category id '{}'", category)
            }
            CurriculumIssue::EmptyCategoryId { index } => {
                write!(f, "category #{} has no id", index + 1)
            }
            CurriculumIssue::DuplicateModule { category, module } => {
                write!(f, "duplicate module id '{}' in category '{}'", module, category)
            }
            CurriculumIssue::EmptyModuleId { category, index } => {
                write!(f, "module #{} in category '{}' has no id", index + 1, category)
            }
            CurriculumIssue::DuplicateElement { module, element } => {
                write!(f, "duplicate element id '{}' in module '{}'", element, module)
            }
            CurriculumIssue::EmptyElementId { module, index } => {
                write!(f, "element #{} in module '{}' has no id", index + 1, module)
            }
        }
    }
}

impl Curriculum {
    /// Check ids for emptiness and uniqueness.
    ///
    /// Element ids must be unique within their module; module ids must be
    /// unique across the whole curriculum because lookups are by module id.
    pub fn validate(&self) -> Vec<CurriculumIssue> {
        let mut issues = Vec::new();
        let mut category_ids = HashSet::new();
        let mut module_ids = HashSet::new();

        for (c_idx, category) in self.categories.iter().enumerate() {
            if category.id.is_empty() {
                issues.push(CurriculumIssue::EmptyCategoryId { index: c_idx });
            } else if !category_ids.insert(category.id.as_str()) {
                issues.push(CurriculumIssue::DuplicateCategory {
                    category: category.id.clone(),
                });
            }

            for (m_idx, module) in category.modules.iter().enumerate() {
                if module.id.is_empty() {
                    issues.push(CurriculumIssue::EmptyModuleId {
                        category: category.id.clone(),
                        index: m_idx,
                    });
                } else if !module_ids.insert(module.id.as_str()) {
                    issues.push(CurriculumIssue::DuplicateModule {
                        category: category.id.clone(),
                        module: module.id.clone(),
                    });
                }

                let mut element_ids = HashSet::new();
                for (e_idx, element) in module.elements.iter().enumerate() {
                    if element.id.is_empty() {
                        issues.push(CurriculumIssue::EmptyElementId {
                            module: module.id.clone(),
                            index: e_idx,
                        });
                    } else if !element_ids.insert(element.id.as_str()) {
                        issues.push(CurriculumIssue::DuplicateElement {
                            module: module.id.clone(),
                            element: element.id.clone(),
                        });
                    }
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{Category, Element, Module};

    #[test]
    fn test_clean_curriculum() {
        let curriculum = Curriculum::new().with_category(
            Category::new("git").with_module(
                Module::new("branches")
                    .with_element(Element::new("main"))
                    .with_element(Element::new("feature")),
            ),
        );
        assert!(curriculum.validate().is_empty());
    }

    #[test]
    fn test_duplicate_element_in_module() {
        let curriculum = Curriculum::new().with_category(
            Category::new("electronics").with_module(
                Module::new("m1")
                    .with_element(Element::new("r1"))
                    .with_element(Element::new("r1")),
            ),
        );
        assert_eq!(
            curriculum.validate(),
            vec![CurriculumIssue::DuplicateElement {
                module: "m1".to_string(),
                element: "r1".to_string(),
            }]
        );
    }

    #[test]
    fn test_same_element_id_in_different_modules_is_fine() {
        let curriculum = Curriculum::new().with_category(
            Category::new("electronics")
                .with_module(Module::new("m1").with_element(Element::new("gnd")))
                .with_module(Module::new("m2").with_element(Element::new("gnd"))),
        );
        assert!(curriculum.validate().is_empty());
    }

    #[test]
    fn test_duplicate_module_across_categories() {
        let curriculum = Curriculum::new()
            .with_category(Category::new("a").with_module(Module::new("intro")))
            .with_category(Category::new("b").with_module(Module::new("intro")));
        let issues = curriculum.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], CurriculumIssue::DuplicateModule { .. }));
    }

    #[test]
    fn test_empty_ids() {
        let curriculum = Curriculum::new().with_category(
            Category::new("").with_module(Module::new("").with_element(Element::new(""))),
        );
        let issues = curriculum.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].to_string(), "category #1 has no id");
    }
}
