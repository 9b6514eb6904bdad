use crate::name::NameId;
use crate::xmldata::{Node, XmlData};
use crate::xmlvalue::Element;

impl XmlData {
    /// Create a new, unattached element node.
    ///
    /// It becomes the root of a tree of its own until it is appended to a
    /// parent.
    pub fn new_element(&mut self, name_id: NameId) -> Node {
        Node::new(self.arena.new_node(Element::new(name_id)))
    }

    /// Create a new, unattached element node given a tag name.
    pub fn new_element_named(&mut self, tag: &str) -> Node {
        let name_id = self.add_name(tag);
        self.new_element(name_id)
    }
}
