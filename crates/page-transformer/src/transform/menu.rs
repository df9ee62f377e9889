use page_scene::Dom;

use crate::config::MenuConfig;
use crate::element::require_element;
use crate::error::TransformError;

/// Lay the button menu out horizontally by dropping its vertical class.
///
/// The selector is the vertical class itself, so a second run finds nothing
/// and reports [`TransformError::MissingElement`] without touching the page.
pub fn transform_menu_to_horizontal<D: Dom>(dom: &D, config: &MenuConfig) -> Result<(), TransformError> {
    let menu = require_element(dom, &config.selector)?;
    dom.remove_class(&menu, &config.vertical_class)?;
    log::debug!("menu: removed '{}'", config.vertical_class);
    Ok(())
}
