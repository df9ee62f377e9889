//! The list widget: one selected item, click to select, hover to preview.

use std::cell::Cell;
use std::rc::Rc;

use page_scene::{Dom, DomError, ElementSpec, HoverKind};

use crate::behavior::{add_click_event, add_hover_event, log_failure};
use crate::config::ListGroupConfig;
use crate::element::{create_element, require_element};
use crate::error::TransformError;

/// Live handle to the list widget.
///
/// Clones share the selection, so the handle returned by
/// [`transform_list_group`] observes clicks made through the page.
#[derive(Clone)]
pub struct ListGroup<D: Dom> {
    dom: D,
    container: D::Element,
    item_selector: String,
    active_class: String,
    selected_item: Rc<Cell<usize>>,
}

impl<D: Dom> ListGroup<D> {
    fn new(dom: &D, container: D::Element, config: &ListGroupConfig) -> Self {
        Self {
            dom: dom.clone(),
            container,
            item_selector: config.item_selector.clone(),
            active_class: config.active_class.clone(),
            selected_item: Rc::new(Cell::new(0)),
        }
    }

    pub fn container(&self) -> &D::Element {
        &self.container
    }

    /// Position of the item that renders as active.
    pub fn selected_item(&self) -> usize {
        self.selected_item.get()
    }

    /// Current items in document order.
    pub fn items(&self) -> Result<Vec<D::Element>, DomError> {
        self.dom
            .query_selector_all_within(&self.container, &self.item_selector)
    }

    /// Make the active class reflect the selection, and only the selection.
    pub fn render(&self) -> Result<(), DomError> {
        let selected = self.selected_item();
        for (index, item) in self.items()?.iter().enumerate() {
            self.dom.remove_class(item, &self.active_class)?;
            if index == selected {
                self.dom.add_class(item, &self.active_class)?;
            }
        }
        Ok(())
    }

    /// Select the item at `index` and render. An index past the last item
    /// is rejected and the selection stays where it was.
    pub fn select(&self, index: usize) -> Result<(), TransformError> {
        let items = self.items()?.len();
        if index >= items {
            return Err(TransformError::NoSuchItem { index, items });
        }
        self.selected_item.set(index);
        self.render()?;
        Ok(())
    }

    /// Hover preview: entering always highlights, leaving keeps the
    /// highlight on the selected item.
    fn preview(&self, item: &D::Element, index: usize, hover: HoverKind) -> Result<(), DomError> {
        match hover {
            HoverKind::Enter => self.dom.add_class(item, &self.active_class),
            HoverKind::Leave if index != self.selected_item() => {
                self.dom.remove_class(item, &self.active_class)
            }
            HoverKind::Leave => Ok(()),
        }
    }
}

/// Append the extra items, wire selection and preview on every item, and
/// render the initial selection (the first item).
pub fn transform_list_group<D: Dom>(
    dom: &D,
    config: &ListGroupConfig,
) -> Result<ListGroup<D>, TransformError> {
    let container = require_element(dom, &config.selector)?;
    let list = ListGroup::new(dom, container, config);

    for text in &config.appended_items {
        let spec = ElementSpec::new(config.item_tag.as_str())
            .with_classes([config.item_class.as_str()])
            .with_text(text.as_str());
        let item = create_element(dom, &spec)?;
        dom.append_child(list.container(), &item)?;
    }

    // Positions are captured here, after all appends, and never recomputed.
    let items = list.items()?;
    for (index, item) in items.iter().enumerate() {
        let on_click = list.clone();
        add_click_event(
            dom,
            item,
            Some(move || log_failure("list selection", on_click.select(index))),
        )?;

        let on_hover = list.clone();
        let target = item.clone();
        let preview = move |hover: HoverKind| {
            log_failure("list preview", on_hover.preview(&target, index, hover))
        };
        add_hover_event(dom, item, Some(preview))?;
    }

    list.render()?;
    log::debug!("list group: {} items, item {} active", items.len(), list.selected_item());
    Ok(list)
}
