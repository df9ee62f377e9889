//! Page transforms applied once after the document has loaded.
//!
//! Every transform is generic over [`page_scene::Dom`], so the same code
//! drives the browser document and the in-memory test document.

pub mod behavior;
pub mod config;
pub mod element;
mod error;
mod startup;
pub mod transform;

pub use config::PageConfig;
pub use error::TransformError;
pub use startup::{startup, startup_with};
pub use transform::list_group::ListGroup;
