//! Platform-agnostic page model.
//!
//! The transforms are written against the [`Dom`] trait. Browser renderers
//! implement it over the real document, while [`Document`] is an in-memory
//! tree used to drive the transforms natively.

mod document;
mod dom;
mod error;
mod selector;

pub use document::{Document, Markup, NodeId, NodeSnapshot, markup};
pub use dom::{Dom, ElementSpec, EventKind, HoverKind, Listener};
pub use error::DomError;
