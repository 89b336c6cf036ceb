//! A minimal in-memory document tree implementing [`shortkey_selector::Node`].

use std::rc::Rc;

use shortkey_selector::Node;

struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeHandle>,
}

/// A reference-counted handle to a node in an in-memory document tree.
///
/// Two handles are equal iff they point at the same node (`Rc::ptr_eq`),
/// the identity comparison the dispatcher's ancestor walk needs to know
/// when it has reached `currentTarget`.
#[derive(Clone, Debug)]
pub struct NodeHandle(Rc<NodeData>);

impl std::fmt::Debug for NodeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeData")
            .field("tag", &self.tag)
            .field("id", &self.id)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NodeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl NodeHandle {
    /// Creates a root node (no parent) with no id or classes.
    pub fn root(tag: impl Into<String>) -> Self {
        Self::new(tag, None, &[], None)
    }

    /// Creates a child of `self`.
    pub fn child(
        &self,
        tag: impl Into<String>,
        id: Option<&str>,
        classes: &[&str],
    ) -> Self {
        Self::new(tag, id, classes, Some(self.clone()))
    }

    fn new(
        tag: impl Into<String>,
        id: Option<&str>,
        classes: &[&str],
        parent: Option<Self>,
    ) -> Self {
        Self(Rc::new(NodeData {
            tag: tag.into(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent,
        }))
    }
}

impl Node for NodeHandle {
    fn tag(&self) -> &str {
        &self.0.tag
    }
    fn id(&self) -> Option<&str> {
        self.0.id.as_deref()
    }
    fn classes(&self) -> &[String] {
        &self.0.classes
    }
    fn parent(&self) -> Option<Self> {
        self.0.parent.clone()
    }
}
