//! Presentation-neutral view of the probe panel and the current selection.

use serde::Serialize;

use crate::curriculum::Element;

use super::bundle::ExplanationBundle;
use super::class::ProbeClass;

/// Placeholder shown in a column with no bullets.
pub const NO_NOTES: &str = "(no notes)";

/// Panel rendering options.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Entry used when a column would otherwise be empty.
    pub empty_placeholder: String,
    /// Whether to show the footer tip for labelled elements.
    pub show_footer_tip: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: NO_NOTES.to_string(),
            show_footer_tip: true,
        }
    }
}

impl PanelConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = placeholder.into();
        self
    }

    pub fn with_footer_tip(mut self, show: bool) -> Self {
        self.show_footer_tip = show;
        self
    }
}

/// A resolved bundle together with what was clicked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeSelection {
    pub bundle: ExplanationBundle,
    pub element_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
}

impl ProbeSelection {
    pub fn new(
        bundle: ExplanationBundle,
        element_type: impl Into<String>,
        element: Option<Element>,
    ) -> Self {
        Self {
            bundle,
            element_type: element_type.into(),
            element,
        }
    }
}

/// Holds at most one selection. A new click replaces it; dismiss clears it.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Option<ProbeSelection>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection.
    pub fn select(&mut self, selection: ProbeSelection) {
        self.current = Some(selection);
    }

    /// Clear the current selection, returning what was shown.
    pub fn dismiss(&mut self) -> Option<ProbeSelection> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&ProbeSelection> {
        self.current.as_ref()
    }

    /// Panel for the current selection, if any.
    pub fn panel(&self, config: &PanelConfig) -> Option<ProbePanel> {
        ProbePanel::render(self.current(), config)
    }
}

/// Panel header line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelHeader {
    pub icon: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ProbeClass>,
    pub element_type: String,
}

/// One of the three bullet columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelColumn {
    pub heading: &'static str,
    pub items: Vec<String>,
}

/// Everything a front end needs to draw the probe panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbePanel {
    pub header: PanelHeader,
    /// Expect, clues, next, in that order.
    pub columns: [PanelColumn; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_tip: Option<String>,
}

impl ProbePanel {
    /// Build the panel for a selection. No selection renders nothing.
    pub fn render(selection: Option<&ProbeSelection>, config: &PanelConfig) -> Option<Self> {
        selection.map(|s| Self::from_selection(s, config))
    }

    /// Build the panel for a present selection.
    pub fn from_selection(selection: &ProbeSelection, config: &PanelConfig) -> Self {
        let bundle = &selection.bundle;

        let column = |heading: &'static str, items: &[String]| PanelColumn {
            heading,
            items: if items.is_empty() {
                vec![config.empty_placeholder.clone()]
            } else {
                items.to_vec()
            },
        };

        let footer_tip = if config.show_footer_tip {
            selection
                .element
                .as_ref()
                .and_then(|e| e.display_label())
                .map(|label| {
                    format!(
                        "Tip: probe {} in the diagram and compare your reading with \"What to expect\".",
                        label
                    )
                })
        } else {
            None
        };

        Self {
            header: PanelHeader {
                icon: bundle.icon.clone(),
                title: bundle.title.clone(),
                class: bundle.meta.class,
                element_type: selection.element_type.clone(),
            },
            columns: [
                column("What to expect", &bundle.expect),
                column("Clues", &bundle.clues),
                column("Next steps", &bundle.next),
            ],
            footer_tip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{build_probe_info, ProbeOverride, ProbeRequest};

    fn override_selection(label: Option<&str>) -> ProbeSelection {
        let mut element = Element::new("j1").with_probe(ProbeOverride::new().with_title("Jumper"));
        if let Some(label) = label {
            element = element.with_label(label);
        }
        let bundle = build_probe_info(&ProbeRequest::new("branch").with_element(&element));
        ProbeSelection::new(bundle, "branch", Some(element))
    }

    #[test]
    fn test_no_selection_renders_nothing() {
        assert!(ProbePanel::render(None, &PanelConfig::default()).is_none());
    }

    #[test]
    fn test_empty_columns_get_placeholder() {
        let selection = override_selection(None);
        let panel = ProbePanel::render(Some(&selection), &PanelConfig::default()).unwrap();
        for column in &panel.columns {
            assert_eq!(column.items, vec![NO_NOTES.to_string()]);
        }
        assert_eq!(panel.header.title, "Jumper");
        assert_eq!(panel.header.class, None);
        assert_eq!(panel.header.element_type, "branch");
    }

    #[test]
    fn test_footer_tip_only_with_label() {
        let config = PanelConfig::default();
        let without = override_selection(None);
        assert!(ProbePanel::render(Some(&without), &config).unwrap().footer_tip.is_none());

        let with = override_selection(Some("J1"));
        let tip = ProbePanel::render(Some(&with), &config).unwrap().footer_tip.unwrap();
        assert!(tip.contains("J1"));

        let hidden = config.with_footer_tip(false);
        assert!(ProbePanel::render(Some(&with), &hidden).unwrap().footer_tip.is_none());
    }

    #[test]
    fn test_default_bundle_columns_pass_through() {
        let element = Element::new("sda").with_label("SDA");
        let bundle = build_probe_info(&ProbeRequest::new("node").with_element(&element));
        let selection = ProbeSelection::new(bundle.clone(), "node", Some(element));
        let panel = ProbePanel::render(Some(&selection), &PanelConfig::default()).unwrap();
        assert_eq!(panel.columns[0].items, bundle.expect);
        assert_eq!(panel.columns[1].items, bundle.clues);
        assert_eq!(panel.columns[2].items, bundle.next);
        assert_eq!(panel.header.class, Some(ProbeClass::Bus));
    }

    #[test]
    fn test_selection_is_last_write_wins() {
        let mut state = SelectionState::new();
        assert!(state.panel(&PanelConfig::default()).is_none());

        state.select(override_selection(Some("first")));
        state.select(override_selection(Some("second")));
        let current = state.current().unwrap();
        assert_eq!(current.element.as_ref().unwrap().label.as_deref(), Some("second"));

        assert!(state.dismiss().is_some());
        assert!(state.current().is_none());
        assert!(state.dismiss().is_none());
    }
}
