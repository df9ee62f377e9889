//! Runs the page transforms in the browser.
//!
//! [`WebDom`] implements [`page_scene::Dom`] over the live document and
//! [`start`] is the wasm entry point.

mod console;
mod dom;
mod entry;

pub use console::install_console_logger;
pub use dom::WebDom;
pub use entry::{run_when_loaded, start};
