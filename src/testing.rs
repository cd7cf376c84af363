//! In-memory `Host` used by unit tests.
//!
//! Understands the small selector subset page behaviors use: `tag`, `.class`,
//! `[attr]`, `[attr="value"]` and `tag[attr="value"]`.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use crate::error::PageError;
use crate::host::{CalendarDate, Host};

pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    pub tag: String,
    pub parent: Option<NodeId>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub value: String,
    pub text: String,
    pub attached: bool,
}

#[derive(Debug)]
pub struct FakeHost {
    nodes: RefCell<Vec<FakeNode>>,
    pub alerts: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    answers: RefCell<VecDeque<bool>>,
    pub today: CalendarDate,
    pub prefers_dark: bool,
}

impl Default for FakeHost {
    fn default() -> Self {
        let root = FakeNode { tag: "html".into(), attached: true, ..FakeNode::default() };
        Self {
            nodes: RefCell::new(vec![root]),
            alerts: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
            answers: RefCell::new(VecDeque::new()),
            today: CalendarDate::new(2024, 3, 9),
            prefers_dark: false,
        }
    }
}

impl FakeHost {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` with the given attributes.
    pub fn add(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            tag: tag.into(),
            parent: Some(parent),
            attributes: attributes.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            attached: true,
            ..FakeNode::default()
        });
        nodes.len() - 1
    }

    /// Append a form control holding `value`.
    pub fn add_field(&self, parent: NodeId, attributes: &[(&str, &str)], value: &str) -> NodeId {
        let id = self.add(parent, "input", attributes);
        self.set_value(id, value);
        id
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node) {
            n.value = value.to_owned();
        }
    }

    pub fn node(&self, node: NodeId) -> FakeNode {
        self.nodes.borrow().get(node).cloned().unwrap_or_default()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.node(node).styles.get(property).cloned()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.node(node).text
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            match nodes.get(id) {
                Some(n) if n.attached => cursor = n.parent,
                _ => return false,
            }
        }
        true
    }

    /// Queue the answer for the next `confirm` call. Unqueued prompts are accepted.
    pub fn answer_next(&self, accept: bool) {
        self.answers.borrow_mut().push_back(accept);
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = nodes.get(node).and_then(|n| n.parent);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    fn matching(&self, selector: &str, scope: Option<NodeId>) -> Vec<NodeId> {
        let rule = SimpleSelector::parse(selector);
        let count = self.nodes.borrow().len();
        (1..count)
            .filter(|id| self.is_attached(*id))
            .filter(|id| scope.map_or(true, |s| self.is_descendant(*id, s)))
            .filter(|id| rule.matches(&self.node(*id)))
            .collect()
    }
}

#[derive(Debug, Default)]
struct SimpleSelector {
    tag: Option<String>,
    class: Option<String>,
    attribute: Option<(String, Option<String>)>,
}

impl SimpleSelector {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(class) = raw.strip_prefix('.') {
            return Self { class: Some(class.to_owned()), ..Self::default() };
        }
        let (tag, rest) = match raw.find('[') {
            Some(at) => (&raw[..at], Some(&raw[at..])),
            None => (raw, None),
        };
        let tag = (!tag.is_empty()).then(|| tag.to_owned());
        let attribute = rest
            .and_then(|r| r.strip_prefix('['))
            .and_then(|r| r.strip_suffix(']'))
            .map(|inner| match inner.split_once('=') {
                Some((name, value)) => (name.to_owned(), Some(value.trim_matches('"').to_owned())),
                None => (inner.to_owned(), None),
            });
        Self { tag, class: None, attribute }
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if self.tag.as_ref().is_some_and(|t| *t != node.tag) {
            return false;
        }
        if let Some(class) = &self.class {
            let classes = node.attributes.get("class").map_or("", String::as_str);
            if !classes.split_whitespace().any(|c| c == class) {
                return false;
            }
        }
        match &self.attribute {
            Some((name, None)) => node.attributes.contains_key(name),
            Some((name, Some(value))) => node.attributes.get(name) == Some(value),
            None => true,
        }
    }
}

impl Host for FakeHost {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, PageError> {
        Ok(self.matching(selector, None))
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Result<Vec<NodeId>, PageError> {
        Ok(self.matching(selector, Some(*scope)))
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let count = self.nodes.borrow().len();
        (0..count).find(|n| self.is_attached(*n) && self.node(*n).attributes.get("id").is_some_and(|v| v == id))
    }

    fn root(&self) -> Result<NodeId, PageError> {
        Ok(Self::ROOT)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.node(*node).attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), PageError> {
        let mut nodes = self.nodes.borrow_mut();
        let n = nodes.get_mut(*node).ok_or_else(|| PageError::Dom(format!("no node {node}")))?;
        n.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) -> Result<(), PageError> {
        let mut nodes = self.nodes.borrow_mut();
        let n = nodes.get_mut(*node).ok_or_else(|| PageError::Dom(format!("no node {node}")))?;
        n.attributes.remove(name);
        Ok(())
    }

    fn value(&self, node: &NodeId) -> String {
        self.node(*node).value
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), PageError> {
        let mut nodes = self.nodes.borrow_mut();
        let n = nodes.get_mut(*node).ok_or_else(|| PageError::Dom(format!("no node {node}")))?;
        n.styles.insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(*node) {
            n.text = text.to_owned();
        }
    }

    fn detach(&self, node: &NodeId) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(*node) {
            n.attached = false;
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }

    fn today(&self) -> CalendarDate {
        self.today
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
