use crate::error::Error;
use crate::name::NameId;
use crate::xmldata::{Node, XmlData};

/// Manipulation of the tree structure.
///
/// Trees only grow: children are appended at the end of their parent and
/// never reordered or removed. Text and attributes can be overwritten.
impl XmlData {
    /// Append a child to the end of the children of the given parent.
    ///
    /// It is now the new last node of the parent.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Append a new element to a parent node given a name, returning the new
    /// element.
    pub fn append_element(&mut self, parent: Node, name_id: NameId) -> Result<Node, Error> {
        let element = self.new_element(name_id);
        self.append(parent, element)?;
        tracing::trace!(
            parent = self.tag(parent),
            tag = self.name_str(name_id),
            "created element"
        );
        Ok(element)
    }

    /// Set the text of a node, replacing any previous text.
    pub fn set_text<S: Into<String>>(&mut self, node: Node, text: S) {
        self.element_mut(node).set_text(text);
    }

    /// Set an attribute of a node given its name, replacing any previous
    /// value.
    pub fn set_attribute<S: Into<String>>(&mut self, node: Node, name: &str, value: S) {
        let name_id = self.add_name(name);
        self.element_mut(node).set_attribute(name_id, value);
    }
}
