use page_scene::Dom;

use crate::config::PageConfig;
use crate::error::TransformError;
use crate::transform::cards::transform_cards_section;
use crate::transform::header::transform_header_section;
use crate::transform::list_group::{ListGroup, transform_list_group};
use crate::transform::menu::transform_menu_to_horizontal;

/// Run every transform against the demo page markup.
pub fn startup<D: Dom>(dom: &D) -> Result<ListGroup<D>, TransformError> {
    startup_with(dom, &PageConfig::default())
}

/// Run menu, header, cards and list transforms in that order.
///
/// The first failure is returned and the remaining transforms are skipped;
/// changes made by earlier transforms stay in place.
pub fn startup_with<D: Dom>(dom: &D, config: &PageConfig) -> Result<ListGroup<D>, TransformError> {
    transform_menu_to_horizontal(dom, &config.menu)?;
    transform_header_section(dom, &config.header)?;
    transform_cards_section(dom, &config.cards)?;
    let list_group = transform_list_group(dom, &config.list_group)?;
    log::info!("page transformed");
    Ok(list_group)
}
