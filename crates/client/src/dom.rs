//! In-memory document tree.
//!
//! The page renders quote cards into a [`Document`] the same way a browser
//! page would: elements with attributes, text nodes, and a single root.
//! Hosts read the tree to draw it and report clicks and submits against its
//! [`NodeId`]s. Removed subtrees are freed; their ids are never reused, so a
//! stale id simply stops being [`contained`](Document::contains).
//!
//! [`VNode`] is the detached, value-typed form produced by the renderer. It
//! serializes to HTML and is turned into live nodes with
//! [`Document::instantiate`].

use thiserror::Error;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Attributes serialized by name only.
const BOOLEAN_ATTRIBUTES: &[&str] = &["checked", "disabled", "hidden"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("node {0:?} is not part of the document")]
    MissingNode(NodeId),
    #[error("node {0:?} is a text node")]
    NotAnElement(NodeId),
}

type ResultDom<T> = Result<T, DomError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VNode {
    Element(VElement),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<VNode>,
}

impl VElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Adds a boolean attribute such as `hidden`.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VNode::Text(text.into()))
    }
}

impl From<VElement> for VNode {
    fn from(value: VElement) -> Self {
        Self::Element(value)
    }
}

impl VNode {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_text(text, out),
            Self::Element(el) => {
                open_tag(&el.tag, el.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())), out);
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                close_tag(&el.tag, out);
            }
        }
    }
}

#[derive(Clone, Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_some()).count()
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.into(),
            attrs: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(text.into()))
    }

    /// Builds live, detached nodes for `vnode` and returns the top node.
    pub fn instantiate(&mut self, vnode: &VNode) -> NodeId {
        match vnode {
            VNode::Text(text) => self.create_text(text.clone()),
            VNode::Element(el) => {
                let id = self.push(NodeKind::Element {
                    tag: el.tag.clone(),
                    attrs: el.attrs.clone(),
                });
                for child in &el.children {
                    let child_id = self.instantiate(child);
                    self.link(id, child_id);
                }
                id
            }
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> ResultDom<()> {
        if !matches!(self.node(parent)?.kind, NodeKind::Element { .. }) {
            return Err(DomError::NotAnElement(parent));
        }
        self.node(child)?;
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// Detaches `node` from its parent and frees the whole subtree.
    ///
    /// The root is never freed; removing it only clears its children.
    pub fn remove(&mut self, node: NodeId) -> ResultDom<()> {
        if node == self.root {
            return self.clear_children(node);
        }
        self.node(node)?;
        self.detach(node);
        self.free(node);
        Ok(())
    }

    pub fn clear_children(&mut self, node: NodeId) -> ResultDom<()> {
        let children = std::mem::take(&mut self.node_mut(node)?.children);
        for child in children {
            self.free(child);
        }
        Ok(())
    }

    /// `true` when `node` is alive and reachable from the root.
    pub fn contains(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            let Ok(data) = self.node(id) else {
                return false;
            };
            if id == self.root {
                return true;
            }
            current = data.parent;
        }
        false
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok().and_then(|data| data.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|data| data.children.as_slice())
            .unwrap_or(&[])
    }

    /// `node` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.node(node).ok().map(|_| node);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        path
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) -> ResultDom<()> {
        let attrs = self.attrs_mut(node)?;
        let value = value.into();
        match attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => attrs.push((name.to_string(), value)),
        }
        Ok(())
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) -> ResultDom<()> {
        self.attrs_mut(node)?.retain(|(key, _)| key != name);
        Ok(())
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.has_attr(node, "hidden")
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) -> ResultDom<()> {
        if hidden {
            self.set_attr(node, "hidden", "")
        } else {
            self.remove_attr(node, "hidden")
        }
    }

    /// Current value of an input element.
    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.attr(node, "value")
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) -> ResultDom<()> {
        self.set_attr(node, "value", value)
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    /// Replaces every child of `node` with a single text node.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> ResultDom<()> {
        if !matches!(self.node(node)?.kind, NodeKind::Element { .. }) {
            return Err(DomError::NotAnElement(node));
        }
        self.clear_children(node)?;
        let text = self.create_text(text);
        self.link(node, text);
        Ok(())
    }

    /// First node in `from`'s subtree, in document order, matching `pred`.
    /// `from` itself is included.
    pub fn find(&self, from: NodeId, mut pred: impl FnMut(NodeId) -> bool) -> Option<NodeId> {
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if self.node(id).is_err() {
                continue;
            }
            if pred(id) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    pub fn find_by_attr(&self, from: NodeId, name: &str, value: &str) -> Option<NodeId> {
        self.find(from, |id| self.attr(id, name) == Some(value))
    }

    /// Looks an element up by its `id` attribute anywhere in the document.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_attr(self.root, "id", id)
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Ok(data) = self.node(node) else {
            return;
        };
        match &data.kind {
            NodeKind::Text(text) => escape_text(text, out),
            NodeKind::Element { tag, attrs } => {
                open_tag(tag, attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())), out);
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in &data.children {
                    self.write_html(*child, out);
                }
                close_tag(tag, out);
            }
        }
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Ok(data) = self.node(node) else {
            return;
        };
        match &data.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &data.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            kind,
            parent: None,
            children: Vec::new(),
        }));
        id
    }

    fn node(&self, id: NodeId) -> ResultDom<&Node> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(DomError::MissingNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> ResultDom<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(DomError::MissingNode(id))
    }

    fn attrs_mut(&mut self, id: NodeId) -> ResultDom<&mut Vec<(String, String)>> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element { attrs, .. } => Ok(attrs),
            NodeKind::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Some(data)) = self.nodes.get_mut(child.0) {
            data.parent = Some(parent);
        }
        if let Some(Some(data)) = self.nodes.get_mut(parent.0) {
            data.children.push(child);
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(Some(data)) = self.nodes.get_mut(parent.0) {
            data.children.retain(|child| *child != node);
        }
        if let Some(Some(data)) = self.nodes.get_mut(node.0) {
            data.parent = None;
        }
    }

    fn free(&mut self, node: NodeId) {
        let Some(data) = self.nodes.get_mut(node.0).and_then(Option::take) else {
            return;
        };
        for child in data.children {
            self.free(child);
        }
    }
}

fn open_tag<'a>(tag: &str, attrs: impl Iterator<Item = (&'a str, &'a str)>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        if BOOLEAN_ATTRIBUTES.contains(&name) {
            continue;
        }
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
