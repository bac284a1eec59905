//! Explanation bundles and author overrides.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::class::ProbeClass;

/// Metadata attached to a resolved bundle.
///
/// Deserialization is lenient: a known key whose value has the wrong shape
/// (e.g. a `class` outside the eight tags) is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "IndexMap<String, Value>")]
pub struct ProbeMeta {
    /// Class chosen by the classifier. Absent when an override replaced classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ProbeClass>,
    /// Kind of diagram node that was clicked (e.g. "node", "branch").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    /// Owning module id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    /// Owning category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Any other author-supplied keys, in authored order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ProbeMeta {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.class.is_none()
            && self.element_type.is_none()
            && self.module_id.is_none()
            && self.category_id.is_none()
            && self.extra.is_empty()
    }
}

impl From<IndexMap<String, Value>> for ProbeMeta {
    fn from(map: IndexMap<String, Value>) -> Self {
        let mut meta = ProbeMeta::default();
        for (key, value) in map {
            let taken = match key.as_str() {
                "class" => {
                    value.is_null()
                        || ProbeClass::deserialize(&value)
                            .map(|class| meta.class = Some(class))
                            .is_ok()
                }
                "elementType" => take_string(&mut meta.element_type, &value),
                "moduleId" => take_string(&mut meta.module_id, &value),
                "categoryId" => take_string(&mut meta.category_id, &value),
                _ => false,
            };
            if !taken {
                meta.extra.insert(key, value);
            }
        }
        meta
    }
}

fn take_string(slot: &mut Option<String>, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            *slot = Some(s.clone());
            true
        }
        _ => false,
    }
}

/// The resolved probe payload shown for a clicked element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationBundle {
    /// Display glyph.
    pub icon: String,
    /// Heading.
    pub title: String,
    /// What the learner should expect to measure.
    pub expect: Vec<String>,
    /// Symptoms that point at a fault.
    pub clues: Vec<String>,
    /// Suggested next steps.
    pub next: Vec<String>,
    /// Classification and context metadata.
    #[serde(default)]
    pub meta: ProbeMeta,
}

/// Author-supplied bundle that replaces classification for one element.
///
/// Every field is optional; the resolver fills gaps field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clues: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProbeMeta>,
}

impl ProbeOverride {
    /// Create an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the expect bullets.
    pub fn with_expect(mut self, items: Vec<String>) -> Self {
        self.expect = Some(items);
        self
    }

    /// Set the clue bullets.
    pub fn with_clues(mut self, items: Vec<String>) -> Self {
        self.clues = Some(items);
        self
    }

    /// Set the next-step bullets.
    pub fn with_next(mut self, items: Vec<String>) -> Self {
        self.next = Some(items);
        self
    }

    /// Set the metadata.
    pub fn with_meta(mut self, meta: ProbeMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Deserialize an element's `probe` field.
///
/// Only a well-formed JSON object counts as an override. Any other value
/// (string, bool, array, null) or an object with mistyped fields is treated
/// as no override at all, so one bad element never fails the whole load.
pub(crate) fn deserialize_override<'de, D>(
    deserializer: D,
) -> Result<Option<ProbeOverride>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Object(map)) => match serde_json::from_value(Value::Object(map)) {
            Ok(probe) => Ok(Some(probe)),
            Err(e) => {
                warn!(error = %e, "ignoring malformed probe override");
                Ok(None)
            }
        },
        Some(Value::Null) | None => Ok(None),
        Some(other) => {
            warn!(value = %other, "ignoring non-object probe override");
            Ok(None)
        }
    }
}
