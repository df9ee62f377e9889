//! In-memory document tree implementing [`Dom`].
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. The tree sits
//! behind `Rc<RefCell<_>>` so a [`Document`] handle can be cloned into event
//! listeners, exactly like a browser document reference.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::dom::{Dom, EventKind, Listener};
use crate::error::DomError;
use crate::selector::{
    SelectorChain, SelectorCombinator, SelectorPart, SelectorStep, parse_selector_groups,
};

/// Index of a node in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: Vec<(EventKind, Listener)>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.index()).ok_or(DomError::UnknownNode)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.index()).ok_or(DomError::UnknownNode)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Parent that is an element; the document root is not one.
    fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(id.index())?.parent?;
        (parent != self.root).then_some(parent)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes.get(node.index()).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Descendants of `root` in document order, excluding `root` itself.
    fn collect_descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.nodes.get(root.index()) else {
            return;
        };
        for &child in &node.children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    fn matches_step(&self, id: NodeId, step: &SelectorStep) -> bool {
        if id == self.root {
            return false;
        }
        let node = &self.nodes[id.index()];
        step.matches(&node.tag, node.id.as_deref(), &node.classes)
    }

    fn matches_chain(&self, id: NodeId, chain: &[SelectorPart]) -> bool {
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !self.matches_step(id, &last.step) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        match last.combinator.unwrap_or(SelectorCombinator::Descendant) {
            SelectorCombinator::Child => self
                .parent_element(id)
                .is_some_and(|parent| self.matches_chain(parent, rest)),
            SelectorCombinator::Descendant => {
                let mut cursor = self.parent_element(id);
                while let Some(ancestor) = cursor {
                    if self.matches_chain(ancestor, rest) {
                        return true;
                    }
                    cursor = self.parent_element(ancestor);
                }
                false
            }
        }
    }

    fn select(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.node(scope)?;
        let groups: Vec<SelectorChain> = parse_selector_groups(selector)?;
        let mut candidates = Vec::new();
        self.collect_descendants(scope, &mut candidates);
        Ok(candidates
            .into_iter()
            .filter(|&id| groups.iter().any(|chain| self.matches_chain(id, chain)))
            .collect())
    }

    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node_mut(id)?.parent.take() else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|&child| child != id);
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        if child == self.root || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::Host(format!(
                "cannot append node {} below node {}",
                child.index(),
                parent.index()
            )));
        }
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    fn snapshot(&self, id: NodeId) -> Result<NodeSnapshot, DomError> {
        let node = self.node(id)?;
        Ok(NodeSnapshot {
            tag: node.tag.clone(),
            id: node.id.clone(),
            classes: node.classes.clone(),
            text: node.text.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.snapshot(child))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Serializable view of a subtree, for assertions and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

/// Declarative element description used to build fixtures.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    children: Vec<Markup>,
}

/// Start describing an element with the given tag.
pub fn markup(tag: &str) -> Markup {
    Markup {
        tag: tag.to_owned(),
        ..Markup::default()
    }
}

impl Markup {
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Whitespace-separated class tokens, like the `class` attribute.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_owned());
            }
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    pub fn child(mut self, child: Markup) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Shared handle to an in-memory document.
#[derive(Clone)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
}

impl Document {
    pub fn new() -> Self {
        let root = Node::new("#document");
        Self {
            tree: Rc::new(RefCell::new(Tree {
                nodes: vec![root],
                root: NodeId(0),
            })),
        }
    }

    pub fn root(&self) -> NodeId {
        self.tree.borrow().root
    }

    /// Build `markup` and append it below `parent`. Returns the new element.
    pub fn mount(&self, parent: NodeId, markup: Markup) -> Result<NodeId, DomError> {
        let Markup { tag, id, classes, text, children } = markup;
        let node = {
            let mut tree = self.tree.borrow_mut();
            let mut node = Node::new(&tag);
            node.id = id;
            node.classes = classes;
            node.text = text;
            let node = tree.alloc(node);
            tree.append_child(parent, node)?;
            node
        };
        for child in children {
            self.mount(node, child)?;
        }
        Ok(node)
    }

    /// Element whose id is `id`, if attached to the document.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        let mut candidates = Vec::new();
        tree.collect_descendants(tree.root, &mut candidates);
        candidates
            .into_iter()
            .find(|&node| tree.nodes[node.index()].id.as_deref() == Some(id))
    }

    pub fn tag(&self, node: NodeId) -> Result<String, DomError> {
        Ok(self.tree.borrow().node(node)?.tag.clone())
    }

    pub fn text(&self, node: NodeId) -> Result<String, DomError> {
        Ok(self.tree.borrow().node(node)?.text.clone())
    }

    /// Class tokens in insertion order.
    pub fn classes(&self, node: NodeId) -> Result<Vec<String>, DomError> {
        Ok(self.tree.borrow().node(node)?.classes.clone())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.tree.borrow().node(node)?.parent)
    }

    pub fn children(&self, node: NodeId) -> Result<Vec<NodeId>, DomError> {
        Ok(self.tree.borrow().node(node)?.children.clone())
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> Result<usize, DomError> {
        let tree = self.tree.borrow();
        Ok(tree
            .node(node)?
            .listeners
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .count())
    }

    /// Fire `kind` on `node` and return how many listeners ran.
    ///
    /// Events do not propagate; only listeners on `node` itself run. The
    /// tree borrow is released before the listeners are called, so they may
    /// mutate the document.
    pub fn dispatch(&self, node: NodeId, kind: EventKind) -> Result<usize, DomError> {
        let listeners: Vec<Listener> = {
            let tree = self.tree.borrow();
            tree.node(node)?
                .listeners
                .iter()
                .filter(|(registered, _)| *registered == kind)
                .map(|(_, listener)| Rc::clone(listener))
                .collect()
        };
        for listener in &listeners {
            listener();
        }
        Ok(listeners.len())
    }

    pub fn click(&self, node: NodeId) -> Result<usize, DomError> {
        self.dispatch(node, EventKind::Click)
    }

    pub fn mouse_enter(&self, node: NodeId) -> Result<usize, DomError> {
        self.dispatch(node, EventKind::MouseEnter)
    }

    pub fn mouse_leave(&self, node: NodeId) -> Result<usize, DomError> {
        self.dispatch(node, EventKind::MouseLeave)
    }

    pub fn snapshot(&self, node: NodeId) -> Result<NodeSnapshot, DomError> {
        self.tree.borrow().snapshot(node)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    type Element = NodeId;

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let tree = self.tree.borrow();
        tree.select(tree.root, selector)
    }

    fn query_selector_all_within(&self, root: &NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.tree.borrow().select(*root, selector)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        Ok(self.tree.borrow_mut().alloc(Node::new(tag)))
    }

    fn text_content(&self, element: &NodeId) -> Result<String, DomError> {
        let tree = self.tree.borrow();
        let mut text = tree.node(*element)?.text.clone();
        let mut descendants = Vec::new();
        tree.collect_descendants(*element, &mut descendants);
        for node in descendants {
            text.push_str(&tree.nodes[node.index()].text);
        }
        Ok(text)
    }

    fn set_text_content(&self, element: &NodeId, text: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let children = std::mem::take(&mut tree.node_mut(*element)?.children);
        for child in children {
            tree.node_mut(child)?.parent = None;
        }
        tree.node_mut(*element)?.text = text.to_owned();
        Ok(())
    }

    fn add_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.node_mut(*element)?.classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, element: &NodeId, class: &str) -> Result<(), DomError> {
        let mut tree = self.tree.borrow_mut();
        tree.node_mut(*element)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn toggle_class(&self, element: &NodeId, class: &str) -> Result<bool, DomError> {
        let mut tree = self.tree.borrow_mut();
        let classes = &mut tree.node_mut(*element)?.classes;
        if let Some(position) = classes.iter().position(|c| c == class) {
            classes.remove(position);
            Ok(false)
        } else {
            classes.push(class.to_owned());
            Ok(true)
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> Result<bool, DomError> {
        let tree = self.tree.borrow();
        Ok(tree.node(*element)?.classes.iter().any(|c| c == class))
    }

    fn detach(&self, element: &NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().detach(*element)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.tree.borrow_mut().append_child(*parent, *child)
    }

    fn add_listener(&self, element: &NodeId, kind: EventKind, listener: Listener) -> Result<(), DomError> {
        self.tree
            .borrow_mut()
            .node_mut(*element)?
            .listeners
            .push((kind, listener));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn fixture() -> Document {
        let doc = Document::new();
        doc.mount(
            doc.root(),
            markup("body").children([
                markup("div").class("container").id("outer").children([
                    markup("div").class("row").id("r0"),
                    markup("div").class("row").id("r1").child(
                        markup("div").class("col").child(markup("div").class("row").id("nested")),
                    ),
                ]),
                markup("ul").class("list-group").id("list").children([
                    markup("li").class("list-group-item").text("one"),
                    markup("li").class("list-group-item").text("two"),
                ]),
            ]),
        )
        .unwrap();
        doc
    }

    fn ids(doc: &Document, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .map(|&node| doc.snapshot(node).unwrap().id.unwrap_or_default())
            .collect()
    }

    #[test]
    fn child_combinator_skips_nested_matches() {
        let doc = fixture();
        let rows = doc.query_selector_all(".container > .row").unwrap();
        assert_eq!(ids(&doc, &rows), ["r0", "r1"]);

        let all_rows = doc.query_selector_all(".container .row").unwrap();
        assert_eq!(ids(&doc, &all_rows), ["r0", "r1", "nested"]);
    }

    #[test]
    fn scoped_query_matches_against_whole_document() {
        let doc = fixture();
        let r1 = doc.element_by_id("r1").unwrap();
        let found = doc.query_selector_all_within(&r1, ".container .row").unwrap();
        assert_eq!(ids(&doc, &found), ["nested"]);
        assert!(doc.query_selector_all_within(&r1, "li").unwrap().is_empty());
    }

    #[test]
    fn query_selector_returns_first_in_document_order() {
        let doc = fixture();
        let first = doc.query_selector("li").unwrap().unwrap();
        assert_eq!(doc.text(first).unwrap(), "one");
        assert_eq!(doc.query_selector(".missing").unwrap(), None);
        assert_eq!(
            doc.query_selector("li:first-child"),
            Err(DomError::InvalidSelector("li:first-child".to_owned()))
        );
    }

    #[test]
    fn class_list_operations() {
        let doc = fixture();
        let list = doc.element_by_id("list").unwrap();
        doc.add_class(&list, "shadow").unwrap();
        doc.add_class(&list, "shadow").unwrap();
        assert_eq!(doc.classes(list).unwrap(), ["list-group", "shadow"]);

        doc.remove_class(&list, "absent").unwrap();
        assert!(doc.toggle_class(&list, "active").unwrap());
        assert!(!doc.toggle_class(&list, "active").unwrap());
        assert_eq!(doc.has_class(&list, "active"), Ok(false));
        assert_eq!(doc.has_class(&list, "shadow"), Ok(true));
    }

    #[test]
    fn append_moves_attached_node_to_the_end() {
        let doc = fixture();
        let list = doc.element_by_id("list").unwrap();
        let items = doc.children(list).unwrap();
        doc.append_child(&list, &items[0]).unwrap();

        let texts: Vec<_> = doc
            .children(list)
            .unwrap()
            .into_iter()
            .map(|item| doc.text(item).unwrap())
            .collect();
        assert_eq!(texts, ["two", "one"]);
    }

    #[test]
    fn detached_nodes_are_not_selected() {
        let doc = fixture();
        let first = doc.query_selector("li").unwrap().unwrap();
        doc.detach(&first).unwrap();
        doc.detach(&first).unwrap();

        assert_eq!(doc.parent(first).unwrap(), None);
        assert_eq!(doc.query_selector_all("li").unwrap().len(), 1);
    }

    #[test]
    fn append_rejects_cycles() {
        let doc = fixture();
        let outer = doc.element_by_id("outer").unwrap();
        let nested = doc.element_by_id("nested").unwrap();
        assert!(matches!(doc.append_child(&nested, &outer), Err(DomError::Host(_))));
        assert!(matches!(doc.append_child(&outer, &outer), Err(DomError::Host(_))));
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let doc = fixture();
        let list = doc.element_by_id("list").unwrap();
        assert_eq!(doc.text_content(&list).unwrap(), "onetwo");
    }

    #[test]
    fn created_elements_start_unattached() {
        let doc = fixture();
        let item = doc.create_element("LI").unwrap();
        doc.set_text_content(&item, "three").unwrap();
        assert_eq!(doc.tag(item).unwrap(), "li");
        assert_eq!(doc.parent(item).unwrap(), None);
        assert_eq!(doc.query_selector_all("li").unwrap().len(), 2);

        let list = doc.element_by_id("list").unwrap();
        doc.append_child(&list, &item).unwrap();
        assert_eq!(doc.query_selector_all("li").unwrap().len(), 3);
    }

    #[test]
    fn dispatch_runs_matching_listeners_and_allows_mutation() {
        let doc = fixture();
        let list = doc.element_by_id("list").unwrap();
        let clicks = Rc::new(Cell::new(0));

        let handle = doc.clone();
        let counter = Rc::clone(&clicks);
        doc.add_listener(
            &list,
            EventKind::Click,
            Rc::new(move || {
                counter.set(counter.get() + 1);
                handle.toggle_class(&list, "active").unwrap();
            }),
        )
        .unwrap();

        assert_eq!(doc.mouse_enter(list).unwrap(), 0);
        assert_eq!(doc.click(list).unwrap(), 1);
        assert_eq!(clicks.get(), 1);
        assert_eq!(doc.has_class(&list, "active"), Ok(true));
        assert_eq!(doc.listener_count(list, EventKind::Click).unwrap(), 1);
        assert_eq!(doc.listener_count(list, EventKind::MouseLeave).unwrap(), 0);
    }

    #[test]
    fn snapshot_serializes_compactly() {
        let doc = fixture();
        let list = doc.element_by_id("list").unwrap();
        let json = serde_json::to_value(doc.snapshot(list).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": "ul",
                "id": "list",
                "classes": ["list-group"],
                "children": [
                    { "tag": "li", "classes": ["list-group-item"], "text": "one" },
                    { "tag": "li", "classes": ["list-group-item"], "text": "two" },
                ]
            })
        );
    }

    #[test]
    fn unknown_nodes_are_reported() {
        let doc = Document::new();
        let other = fixture();
        let foreign = other.element_by_id("nested").unwrap();
        assert_eq!(doc.add_class(&foreign, "x"), Err(DomError::UnknownNode));
        assert_eq!(doc.has_class(&foreign, "x"), Err(DomError::UnknownNode));
        assert_eq!(doc.text_content(&foreign), Err(DomError::UnknownNode));
    }
}
