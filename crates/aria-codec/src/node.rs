//! Reference Host Node
//!
//! Minimal shared-handle node backing the test suites and doctests.
//! Attributes are kept in insertion order; lookups probe linearly, which is
//! plenty for the handful of attributes a single element carries.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Element;

#[derive(Debug, Default)]
struct NodeInner {
    id: String,
    attrs: Vec<(String, String)>,
}

/// Shared-handle node with an ordered string attribute store.
///
/// Cloning aliases the same underlying node.
#[derive(Debug, Clone, Default)]
pub struct SimpleNode {
    inner: Rc<RefCell<NodeInner>>,
}

impl SimpleNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes currently set.
    pub fn len(&self) -> usize {
        self.inner.borrow().attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attribute names in insertion order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.inner
            .borrow()
            .attrs
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl Element for SimpleNode {
    fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.clone())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        if let Some(slot) = inner.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            inner.attrs.push((name.to_string(), value.to_string()));
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        self.inner.borrow_mut().attrs.retain(|(n, _)| n != name);
    }

    fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    fn set_id(&mut self, id: &str) {
        self.inner.borrow_mut().id = id.to_string();
    }
}
