use indextree::{Arena, NodeId};

use crate::name::{NameId, NameLookup};
use crate::xmlvalue::Element;

pub(crate) type XmlArena = Arena<Element>;

/// A node in an XML tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// `XmlData` owns the nodes of one or more XML trees, together with the
/// interned names used by them.
///
/// It is implemented in several sections: access, creation, manipulation,
/// path resolution, parsing, serialization and conversion.
pub struct XmlData {
    pub(crate) arena: XmlArena,
    pub(crate) name_lookup: NameLookup,
}

impl XmlData {
    /// Create a new, empty `XmlData`.
    pub fn new() -> Self {
        XmlData {
            arena: XmlArena::new(),
            name_lookup: NameLookup::new(),
        }
    }

    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// Whether `node` is a live node of this `XmlData`.
    pub fn contains(&self, node: Node) -> bool {
        self.arena
            .get(node.get())
            .map(|n| !n.is_removed())
            .unwrap_or(false)
    }

    /// Access the element value of a node.
    #[inline]
    pub fn element(&self, node: Node) -> &Element {
        self.arena[node.get()].get()
    }

    /// Mutably access the element value of a node.
    #[inline]
    pub fn element_mut(&mut self, node: Node) -> &mut Element {
        self.arena[node.get()].get_mut()
    }

    /// Intern a name, returning its id. Existing names give back the same id.
    pub fn add_name(&mut self, name: &str) -> NameId {
        if let Some(name_id) = self.name_lookup.get_id(name) {
            return name_id;
        }
        self.name_lookup.get_id_mut(name.to_string())
    }

    /// Look up the id of a name, if it was interned before.
    pub fn name(&self, name: &str) -> Option<NameId> {
        self.name_lookup.get_id(name)
    }

    /// The string for a name id.
    #[inline]
    pub fn name_str(&self, name_id: NameId) -> &str {
        self.name_lookup.get_value(name_id)
    }
}

impl Default for XmlData {
    fn default() -> Self {
        Self::new()
    }
}
