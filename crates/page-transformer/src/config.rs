//! Page markup contract: selectors, class tokens and literal texts.
//!
//! [`PageConfig::default`] matches the demo page. Any field can be
//! overridden from JSON; omitted fields keep their defaults. A page supplies
//! overrides in a `<script type="application/json" id="page-transformer-config">`
//! element, read by [`PageConfig::load_embedded`].

use page_scene::Dom;
use serde::Deserialize;

use crate::element::get_element;
use crate::error::TransformError;

pub const EMBEDDED_CONFIG_SELECTOR: &str = "script#page-transformer-config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub menu: MenuConfig,
    pub header: HeaderConfig,
    pub cards: CardsConfig,
    pub list_group: ListGroupConfig,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configuration embedded in the page, or the defaults when the page
    /// carries none.
    pub fn load_embedded<D: Dom>(dom: &D) -> Result<Self, TransformError> {
        let Some(script) = get_element(dom, EMBEDDED_CONFIG_SELECTOR)? else {
            return Ok(Self::default());
        };
        let json = dom.text_content(&script)?;
        let config = Self::from_json(&json)
            .map_err(|error| TransformError::InvalidConfig(error.to_string()))?;
        log::debug!("using page config from '{EMBEDDED_CONFIG_SELECTOR}'");
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub selector: String,
    /// Class that stacks the menu buttons vertically.
    pub vertical_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            selector: ".btn-group-vertical".to_owned(),
            vertical_class: "btn-group-vertical".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub banner_selector: String,
    pub button_selector: String,
    pub banner_classes: Vec<String>,
    pub button_removed_class: String,
    pub button_added_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            banner_selector: ".jumbotron".to_owned(),
            button_selector: ".jumbotron .btn.btn-primary".to_owned(),
            banner_classes: vec![
                "bg-secondary".to_owned(),
                "text-white".to_owned(),
                "text-right".to_owned(),
            ],
            button_removed_class: "btn-primary".to_owned(),
            button_added_class: "btn-success".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub row_selector: String,
    /// Zero-based position of the card row among `row_selector` matches.
    pub row_index: usize,
    pub button_selector: String,
    /// Toggled on every pointer enter and leave of a card button.
    pub highlight_class: String,
    pub slot_selector: String,
    /// New slot order, as indices into the original document order.
    pub order: Vec<usize>,
}

impl CardsConfig {
    /// Number of slots the permutation addresses.
    pub fn required_slots(&self) -> usize {
        self.order.iter().max().map_or(0, |max| max + 1)
    }
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            row_selector: ".container > .row".to_owned(),
            row_index: 2,
            button_selector: ".btn".to_owned(),
            highlight_class: "btn-success".to_owned(),
            slot_selector: ".col-lg-3".to_owned(),
            // [animals, tech, people, nature] -> [nature, animals, people, tech]
            order: vec![3, 0, 2, 1],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListGroupConfig {
    pub selector: String,
    pub item_selector: String,
    pub item_tag: String,
    pub item_class: String,
    pub active_class: String,
    /// Texts of the items appended before the widget goes live.
    pub appended_items: Vec<String>,
}

impl Default for ListGroupConfig {
    fn default() -> Self {
        Self {
            selector: ".list-group".to_owned(),
            item_selector: "li".to_owned(),
            item_tag: "li".to_owned(),
            item_class: "list-group-item".to_owned(),
            active_class: "active".to_owned(),
            appended_items: vec!["Quarto item".to_owned(), "Quinto item".to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use page_scene::{Document, markup};

    use super::*;

    fn page_with_script(json: &str) -> Document {
        let doc = Document::new();
        doc.mount(
            doc.root(),
            markup("body").child(markup("script").id("page-transformer-config").text(json)),
        )
        .unwrap();
        doc
    }

    #[test]
    fn embedded_config_overrides_defaults() {
        let doc = page_with_script(r#"{ "list_group": { "active_class": "selected" } }"#);
        let config = PageConfig::load_embedded(&doc).unwrap();
        assert_eq!(config.list_group.active_class, "selected");
        assert_eq!(config.cards, CardsConfig::default());
    }

    #[test]
    fn page_without_embedded_config_uses_defaults() {
        let doc = Document::new();
        doc.mount(doc.root(), markup("body")).unwrap();
        assert_eq!(PageConfig::load_embedded(&doc).unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_embedded_config_is_reported() {
        let doc = page_with_script(r#"{ "menu": "#);
        assert!(matches!(
            PageConfig::load_embedded(&doc),
            Err(TransformError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_json_yields_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{
                "cards": { "row_index": 0, "order": [1, 0] },
                "list_group": { "appended_items": ["Sexto item"] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.cards.row_index, 0);
        assert_eq!(config.cards.order, [1, 0]);
        assert_eq!(config.cards.slot_selector, ".col-lg-3");
        assert_eq!(config.list_group.appended_items, ["Sexto item"]);
        assert_eq!(config.list_group.active_class, "active");
        assert_eq!(config.menu, MenuConfig::default());
    }

    #[test]
    fn required_slots_follows_largest_index() {
        assert_eq!(CardsConfig::default().required_slots(), 4);
        let empty = CardsConfig { order: Vec::new(), ..CardsConfig::default() };
        assert_eq!(empty.required_slots(), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json(r#"{ "cards": { "row_index": "two" } }"#).is_err());
    }
}
