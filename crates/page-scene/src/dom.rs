use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::DomError;

/// Event listener registered on an element. Listeners receive no event object.
pub type Listener = Rc<dyn Fn()>;

/// DOM events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// Event type name as understood by `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
        }
    }
}

/// Pointer transition passed to hover callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKind {
    Enter,
    Leave,
}

impl HoverKind {
    pub fn event_kind(self) -> EventKind {
        match self {
            HoverKind::Enter => EventKind::MouseEnter,
            HoverKind::Leave => EventKind::MouseLeave,
        }
    }
}

/// Description of an element to construct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    /// Tag name, e.g. `li`.
    pub element: String,
    pub classes: Vec<String>,
    pub text: String,
}

impl ElementSpec {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            ..Self::default()
        }
    }

    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Minimal document API the page transforms need.
///
/// Implementations are cheap handles (`Clone`) onto a shared document, so
/// event listeners can capture them. All calls are synchronous and happen on
/// the thread that owns the document.
pub trait Dom: Clone + 'static {
    /// Handle to an element. Equality is identity.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    /// First element in document order matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, DomError>;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>, DomError>;

    /// Descendants of `root` matching `selector`, in document order.
    ///
    /// As in browsers, the whole selector is matched against the document;
    /// only the candidates are restricted to the subtree.
    fn query_selector_all_within(
        &self,
        root: &Self::Element,
        selector: &str,
    ) -> Result<Vec<Self::Element>, DomError>;

    /// New unattached element with the given tag.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, element: &Self::Element) -> Result<String, DomError>;

    /// Replace the element's content with a single text node.
    fn set_text_content(&self, element: &Self::Element, text: &str) -> Result<(), DomError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    /// Removing an absent class is not an error.
    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), DomError>;

    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> Result<bool, DomError>;

    fn has_class(&self, element: &Self::Element, class: &str) -> Result<bool, DomError>;

    /// Remove the element from its parent. No-op for unattached elements.
    fn detach(&self, element: &Self::Element) -> Result<(), DomError>;

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), DomError>;

    /// Register `listener` for `kind` on `element` for the element's lifetime.
    fn add_listener(
        &self,
        element: &Self::Element,
        kind: EventKind,
        listener: Listener,
    ) -> Result<(), DomError>;
}
