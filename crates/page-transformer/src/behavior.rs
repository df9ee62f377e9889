//! Event behavior attachment.
//!
//! A missing callback (`None`) leaves the element untouched. Listeners are
//! never removed; they live as long as their element.

use std::fmt;
use std::rc::Rc;

use page_scene::{Dom, DomError, EventKind, HoverKind};

/// Call `callback` with [`HoverKind::Enter`] / [`HoverKind::Leave`] when the
/// pointer enters or leaves `element`.
pub fn add_hover_event<D, F>(dom: &D, element: &D::Element, callback: Option<F>) -> Result<(), DomError>
where
    D: Dom,
    F: Fn(HoverKind) + 'static,
{
    let Some(callback) = callback else {
        return Ok(());
    };
    let callback = Rc::new(callback);
    for hover in [HoverKind::Enter, HoverKind::Leave] {
        let callback = Rc::clone(&callback);
        dom.add_listener(element, hover.event_kind(), Rc::new(move || callback(hover)))?;
    }
    Ok(())
}

/// Call `callback` once per click on `element`.
pub fn add_click_event<D, F>(dom: &D, element: &D::Element, callback: Option<F>) -> Result<(), DomError>
where
    D: Dom,
    F: Fn() + 'static,
{
    let Some(callback) = callback else {
        return Ok(());
    };
    dom.add_listener(element, EventKind::Click, Rc::new(callback))
}

/// Event handlers have nobody to return an error to; log it instead.
pub(crate) fn log_failure<T, E: fmt::Display>(context: &str, result: Result<T, E>) {
    if let Err(error) = result {
        log::error!("{context}: {error}");
    }
}
