use log::LevelFilter;
use page_transformer::PageConfig;
use wasm_bindgen::{JsCast, closure::Closure, prelude::wasm_bindgen};

use crate::console::install_console_logger;
use crate::dom::WebDom;

/// Wasm entry point: transform the page once its content has loaded.
#[wasm_bindgen(start)]
pub fn start() {
    install_console_logger(LevelFilter::Info);
    let Some(dom) = WebDom::from_window() else {
        zoon::eprintln!("[PageTransformer] no document to transform");
        return;
    };
    run_when_loaded(dom);
}

/// Run the transforms on `DOMContentLoaded`, or right away when the document
/// is already parsed (the module may load after the event has fired).
pub fn run_when_loaded(dom: WebDom) {
    if dom.document().ready_state() != "loading" {
        run_startup(&dom);
        return;
    }
    let document = dom.document().clone();
    let on_loaded = Closure::once(move || run_startup(&dom));
    if let Err(error) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref())
    {
        log::error!("cannot listen for DOMContentLoaded: {error:?}");
        return;
    }
    on_loaded.forget();
}

/// Transform the page with its embedded configuration, if any.
fn run_startup(dom: &WebDom) {
    let result = PageConfig::load_embedded(dom)
        .and_then(|config| page_transformer::startup_with(dom, &config));
    if let Err(error) = result {
        log::error!("startup aborted: {error}");
    }
}
