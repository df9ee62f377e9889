use page_scene::Dom;

use crate::config::HeaderConfig;
use crate::element::require_element;
use crate::error::TransformError;

/// Restyle the banner and swap its primary button to the success style.
pub fn transform_header_section<D: Dom>(dom: &D, config: &HeaderConfig) -> Result<(), TransformError> {
    let banner = require_element(dom, &config.banner_selector)?;
    let button = require_element(dom, &config.button_selector)?;

    for class in &config.banner_classes {
        dom.add_class(&banner, class)?;
    }
    dom.remove_class(&button, &config.button_removed_class)?;
    dom.add_class(&button, &config.button_added_class)?;

    log::debug!("header: banner restyled, button now '{}'", config.button_added_class);
    Ok(())
}
