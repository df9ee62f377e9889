//! Demo page fixture for the native transform tests.

#![allow(dead_code)]

use page_scene::{Document, Dom, NodeId, markup};

pub struct Page {
    pub doc: Document,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn card(id: &str, title: &str) -> page_scene::Markup {
    markup("div").class("col-lg-3").id(id).child(
        markup("div").class("card").children([
            markup("h5").class("card-title").text(title),
            markup("a").class("btn btn-primary").id(&format!("{id}-btn")).text("Ver mais"),
        ]),
    )
}

/// The page as served: vertical menu, banner, three rows (the third holds
/// the cards) and a list with three items.
pub fn page() -> Page {
    page_with_cards(&["animals", "tech", "people", "nature"])
}

pub fn page_with_cards(cards: &[&str]) -> Page {
    init_logging();
    let doc = Document::new();
    doc.mount(
        doc.root(),
        markup("body").children([
            markup("nav").class("container").child(
                markup("div").class("btn-group-vertical").id("menu").children([
                    markup("button").class("btn btn-secondary").text("Home"),
                    markup("button").class("btn btn-secondary").text("Sobre"),
                ]),
            ),
            markup("div").class("jumbotron").id("banner").children([
                markup("h1").text("Bem-vindo"),
                markup("a").class("btn btn-primary btn-lg").id("cta").text("Saiba mais"),
            ]),
            markup("main").class("container").children([
                markup("div").class("row").id("row-0").child(markup("div").class("col")),
                markup("div").class("row").id("row-1").child(markup("div").class("col")),
                markup("div")
                    .class("row")
                    .id("cards")
                    .children(cards.iter().map(|name| card(name, name))),
                markup("div").class("row").id("row-3").child(
                    markup("ul").class("list-group").id("list").children([
                        markup("li").class("list-group-item").text("Primeiro item"),
                        markup("li").class("list-group-item").text("Segundo item"),
                        markup("li").class("list-group-item").text("Terceiro item"),
                    ]),
                ),
            ]),
        ]),
    )
    .unwrap();
    Page { doc }
}

impl Page {
    pub fn by_id(&self, id: &str) -> NodeId {
        self.doc
            .element_by_id(id)
            .unwrap_or_else(|| panic!("no element with id '{id}'"))
    }

    pub fn classes(&self, id: &str) -> Vec<String> {
        self.doc.classes(self.by_id(id)).unwrap()
    }

    /// Ids of the children of the element with id `id`.
    pub fn child_ids(&self, id: &str) -> Vec<String> {
        self.doc
            .children(self.by_id(id))
            .unwrap()
            .into_iter()
            .map(|child| self.doc.snapshot(child).unwrap().id.unwrap_or_default())
            .collect()
    }

    pub fn list_items(&self) -> Vec<NodeId> {
        self.doc.query_selector_all(".list-group li").unwrap()
    }

    /// Positions of the list items carrying `active`.
    pub fn active_items(&self) -> Vec<usize> {
        self.list_items()
            .iter()
            .enumerate()
            .filter(|(_, item)| self.doc.has_class(item, "active").unwrap())
            .map(|(index, _)| index)
            .collect()
    }
}
