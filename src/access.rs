use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::name::NameId;
use crate::xmldata::{Node, XmlData};

/// Node edges.
///
/// Used by [`XmlData::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node; the start tag.
    Start(Node),
    /// The end edge of a node; the end tag. For an element without
    /// children the end edge occurs immediately after the start edge.
    End(Node),
}

/// ## Read-only access
impl XmlData {
    /// Get parent node.
    ///
    /// Returns [`None`] if this is the root of a tree.
    ///
    /// ```rust
    /// let mut data = xmlfactory::XmlData::new();
    /// let root = data.parse("<p><b/></p>")?;
    /// let b = data.first_child(root).unwrap();
    /// assert_eq!(data.parent(b), Some(root));
    /// assert_eq!(data.parent(root), None);
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the child elements of a node, in document order.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// First child of a node, if any.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Whether a node has child elements.
    pub fn has_children(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }

    /// The first child with the given name, in document order.
    pub fn find_child(&self, node: Node, name_id: NameId) -> Option<Node> {
        self.children(node)
            .find(|child| self.element(*child).name() == name_id)
    }

    /// Traverse a node and its descendants in document order.
    ///
    /// ```rust
    /// use xmlfactory::NodeEdge;
    ///
    /// let mut data = xmlfactory::XmlData::new();
    /// let root = data.parse("<a><b/></a>")?;
    /// let b = data.first_child(root).unwrap();
    /// let edges = data.traverse(root).collect::<Vec<_>>();
    /// assert_eq!(
    ///     edges,
    ///     vec![
    ///         NodeEdge::Start(root),
    ///         NodeEdge::Start(b),
    ///         NodeEdge::End(b),
    ///         NodeEdge::End(root),
    ///     ]
    /// );
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// The tag name of a node.
    pub fn tag(&self, node: Node) -> &str {
        self.name_str(self.element(node).name())
    }

    /// The text of a node, if set.
    pub fn text(&self, node: Node) -> Option<&str> {
        self.element(node).text()
    }

    /// Get an attribute value by name.
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        let name_id = self.name(name)?;
        self.element(node).get_attribute(name_id)
    }

    /// Attributes of a node as `(name, value)` pairs, in the order they were
    /// first set.
    pub fn attributes(&self, node: Node) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.element(node)
            .attributes()
            .iter()
            .map(|(name_id, value)| (self.name_str(*name_id), value.as_str()))
    }

    /// Attributes of a node as `(name, value)` pairs, sorted by name.
    pub fn sorted_attributes(&self, node: Node) -> Vec<(&str, &str)> {
        let mut attributes = self.attributes(node).collect::<Vec<_>>();
        attributes.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        attributes
    }

    /// An element without children and without text. These serialize as
    /// `<tag/>`.
    pub fn is_empty_element(&self, node: Node) -> bool {
        !self.has_children(node) && self.text(node).is_none()
    }
}
