//! Element lookup and construction.

use page_scene::{Dom, DomError, ElementSpec};

use crate::error::TransformError;

/// First element matching `selector`, or `None`.
pub fn get_element<D: Dom>(dom: &D, selector: &str) -> Result<Option<D::Element>, DomError> {
    dom.query_selector(selector)
}

/// Like [`get_element`], but a missing element is an error.
pub fn require_element<D: Dom>(dom: &D, selector: &str) -> Result<D::Element, TransformError> {
    get_element(dom, selector)?.ok_or_else(|| TransformError::MissingElement {
        selector: selector.to_owned(),
    })
}

/// Build a new unattached element from `spec`. The caller inserts it.
pub fn create_element<D: Dom>(dom: &D, spec: &ElementSpec) -> Result<D::Element, DomError> {
    let element = dom.create_element(&spec.element)?;
    for class in &spec.classes {
        dom.add_class(&element, class)?;
    }
    dom.set_text_content(&element, &spec.text)?;
    Ok(element)
}
