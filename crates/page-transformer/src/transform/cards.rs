use page_scene::{Dom, HoverKind};

use crate::behavior::{add_hover_event, log_failure};
use crate::config::CardsConfig;
use crate::error::TransformError;

/// Wire hover highlighting on the card buttons and reorder the card slots.
///
/// The card row is addressed by position among the row containers, not by a
/// semantic selector. Every captured slot is detached and only the slots
/// named by `order` are appended back, in that order.
pub fn transform_cards_section<D: Dom>(dom: &D, config: &CardsConfig) -> Result<(), TransformError> {
    let rows = dom.query_selector_all(&config.row_selector)?;
    let found = rows.len();
    let row = rows
        .into_iter()
        .nth(config.row_index)
        .ok_or_else(|| TransformError::MissingRow {
            selector: config.row_selector.clone(),
            index: config.row_index,
            found,
        })?;

    for button in dom.query_selector_all_within(&row, &config.button_selector)? {
        let handle = dom.clone();
        let target = button.clone();
        let class = config.highlight_class.clone();
        // Both transitions toggle, so a full enter + leave cycle is a no-op.
        let on_hover = move |_: HoverKind| log_failure("card highlight", handle.toggle_class(&target, &class));
        add_hover_event(dom, &button, Some(on_hover))?;
    }

    let cards = dom.query_selector_all_within(&row, &config.slot_selector)?;
    let required = config.required_slots();
    if cards.len() < required {
        return Err(TransformError::NotEnoughCards {
            found: cards.len(),
            required,
        });
    }

    for card in &cards {
        dom.detach(card)?;
    }
    for &index in &config.order {
        dom.append_child(&row, &cards[index])?;
    }

    log::debug!("cards: {} slots reordered as {:?}", cards.len(), config.order);
    Ok(())
}
