use crate::error::Error;
use crate::name::NameId;
use crate::path::Path;
use crate::xmldata::{Node, XmlData};

/// What a [`Path`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// An element.
    Element(Node),
    /// An attribute of an element.
    Attribute(Node, NameId),
}

impl Target {
    /// The element addressed, or the owner element of the attribute.
    pub fn node(&self) -> Node {
        match self {
            Target::Element(node) | Target::Attribute(node, _) => *node,
        }
    }
}

/// ## Path resolution
///
/// Resolving a path walks it from a starting element. Each step descends into
/// the first child with the step's name, creating that child if there is
/// none. Forced steps (`name+`) always create a new child. Resolving
/// therefore never fails on a well-formed path and creates elements as a side
/// effect, even when only reading.
impl XmlData {
    /// Resolve a path relative to `start`, creating missing elements.
    ///
    /// ```rust
    /// use xmlfactory::{Path, Target, XmlData};
    ///
    /// let mut data = XmlData::new();
    /// let root = data.new_element_named("root");
    /// let path: Path = "alpha/bravo".parse()?;
    /// let first = data.resolve(root, &path)?;
    /// let second = data.resolve(root, &path)?;
    /// assert_eq!(first, second);
    /// assert_eq!(data.tag(first.node()), "bravo");
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn resolve(&mut self, start: Node, path: &Path) -> Result<Target, Error> {
        let mut current = start;
        for segment in path.segments() {
            let name_id = self.add_name(segment.tag());
            current = if segment.is_forced() {
                self.append_element(current, name_id)?
            } else {
                match self.find_child(current, name_id) {
                    Some(child) => child,
                    None => self.append_element(current, name_id)?,
                }
            };
        }
        Ok(match path.attribute() {
            Some(attribute) => Target::Attribute(current, self.add_name(attribute)),
            None => Target::Element(current),
        })
    }

    /// Resolve a path and store `value` in the target: the text of an
    /// element target, or the value of an attribute target. Returns the
    /// element, which for an attribute target is its owner.
    pub fn assign<S: Into<String>>(
        &mut self,
        start: Node,
        path: &Path,
        value: S,
    ) -> Result<Node, Error> {
        let target = self.resolve(start, path)?;
        match target {
            Target::Element(node) => self.element_mut(node).set_text(value),
            Target::Attribute(node, name_id) => {
                self.element_mut(node).set_attribute(name_id, value)
            }
        }
        Ok(target.node())
    }
}
