use page_scene::{Dom, DomError, EventKind, Listener};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, NodeList};

/// [`Dom`] over a browser document.
#[derive(Clone)]
pub struct WebDom {
    document: web_sys::Document,
}

impl WebDom {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        Some(Self::new(web_sys::window()?.document()?))
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

fn host_error(error: JsValue) -> DomError {
    DomError::Host(format!("{error:?}"))
}

// `querySelector*` only throws on selector syntax errors.
fn selector_error(selector: &str) -> impl FnOnce(JsValue) -> DomError + '_ {
    move |_| DomError::InvalidSelector(selector.to_owned())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Dom for WebDom {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>, DomError> {
        self.document
            .query_selector(selector)
            .map_err(selector_error(selector))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        self.document
            .query_selector_all(selector)
            .map(elements)
            .map_err(selector_error(selector))
    }

    fn query_selector_all_within(&self, root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
        root.query_selector_all(selector)
            .map(elements)
            .map_err(selector_error(selector))
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document.create_element(tag).map_err(host_error)
    }

    fn text_content(&self, element: &Element) -> Result<String, DomError> {
        Ok(element.text_content().unwrap_or_default())
    }

    fn set_text_content(&self, element: &Element, text: &str) -> Result<(), DomError> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element.class_list().add_1(class).map_err(host_error)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), DomError> {
        element.class_list().remove_1(class).map_err(host_error)
    }

    fn toggle_class(&self, element: &Element, class: &str) -> Result<bool, DomError> {
        element.class_list().toggle(class).map_err(host_error)
    }

    fn has_class(&self, element: &Element, class: &str) -> Result<bool, DomError> {
        Ok(element.class_list().contains(class))
    }

    fn detach(&self, element: &Element) -> Result<(), DomError> {
        element.remove();
        Ok(())
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent.append_child(child).map(drop).map_err(host_error)
    }

    fn add_listener(&self, element: &Element, kind: EventKind, listener: Listener) -> Result<(), DomError> {
        let closure: Closure<dyn Fn()> = Closure::new(move || listener());
        element
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        // Listeners are never removed, so the closure must outlive this call.
        closure.forget();
        Ok(())
    }
}
