//! A minimal in-memory DOM used by this crate's own tests and by
//! `hydration_core`'s scenario tests. Not part of the public contract with
//! any real rendering platform, just enough tree to exercise
//! [`crate::DomNode`] navigation.

use crate::dom::DomNode;
use std::{cell::RefCell, rc::Rc, rc::Weak};

#[derive(Debug)]
struct Inner {
    label: String,
    parent: Option<Weak<RefCell<Inner>>>,
    children: Vec<Rc<RefCell<Inner>>>,
}

/// A node in the fixture tree. Cheap to clone (an `Rc` handle).
#[derive(Clone, Debug)]
pub struct FakeDom(Rc<RefCell<Inner>>);

impl PartialEq for FakeDom {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl DomNode for FakeDom {
    fn first_child(&self) -> Option<Self> {
        self.0.borrow().children.first().cloned().map(FakeDom)
    }

    fn next_sibling(&self) -> Option<Self> {
        let parent = self.0.borrow().parent.as_ref()?.upgrade()?;
        let idx = parent
            .borrow()
            .children
            .iter()
            .position(|c| Rc::ptr_eq(c, &self.0))?;
        parent.borrow().children.get(idx + 1).cloned().map(FakeDom)
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.as_ref()?.upgrade().map(FakeDom)
    }
}

impl FakeDom {
    /// A childless node (text, comment anchor, or empty element).
    pub fn leaf(label: impl Into<String>) -> Self {
        FakeDom(Rc::new(RefCell::new(Inner {
            label: label.into(),
            parent: None,
            children: Vec::new(),
        })))
    }

    /// An element with the given children, in order. Parent pointers are
    /// back-filled so `parent`/`next_sibling` work from any child.
    pub fn with_children(
        label: impl Into<String>,
        children: impl IntoIterator<Item = FakeDom>,
    ) -> Self {
        let node = Rc::new(RefCell::new(Inner {
            label: label.into(),
            parent: None,
            children: Vec::new(),
        }));
        let kids = children
            .into_iter()
            .map(|child| {
                child.0.borrow_mut().parent = Some(Rc::downgrade(&node));
                child.0
            })
            .collect();
        node.borrow_mut().children = kids;
        FakeDom(node)
    }

    /// The debug label this node was constructed with.
    pub fn label(&self) -> String {
        self.0.borrow().label.clone()
    }
}
