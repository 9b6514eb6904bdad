use crate::generic::{GenericValue, Mapping};
use crate::xmldata::{Node, XmlData};

/// ## Conversion to maps and lists
///
/// The shape of the result is guessed from the tree:
///
/// - An element whose children have distinct names is a record: a mapping
///   from child name to converted child, with the element's attributes merged
///   in as plain strings. Later children with a repeated name replace the
///   value of earlier ones, keeping the position of the first.
/// - An element whose first two children share a name is a list. It becomes
///   `{name: [...]}`, where `name` is the name of the first child. Only the
///   first two children are compared; the rest are folded into the list
///   whatever their name.
/// - A leaf with attributes becomes a mapping of its attributes, sorted by
///   name. Any text it has is not represented.
/// - Any other leaf becomes its text, or null.
///
/// Inside a list, leaves contribute their whitespace-trimmed text and are
/// skipped when that is empty or absent.
impl XmlData {
    /// Convert the tree under `node` to a generic value.
    ///
    /// The name of `node` itself is not part of the result: the result is
    /// what `node` would be converted to as a child, except that a node
    /// without children always gives a mapping of its attributes.
    ///
    /// ```rust
    /// let mut data = xmlfactory::XmlData::new();
    /// let root = data.parse("<user><name>Alpha</name><login>Bravo</login></user>")?;
    /// assert_eq!(
    ///     data.to_generic(root).to_json()?,
    ///     r#"{"name": "Alpha", "login": "Bravo"}"#
    /// );
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn to_generic(&self, node: Node) -> GenericValue {
        if self.has_children(node) {
            self.convert_branch(node)
        } else {
            GenericValue::Mapping(self.attribute_mapping(node, false))
        }
    }

    fn convert_branch(&self, node: Node) -> GenericValue {
        let mut mapping = if self.is_record(node) {
            self.record(node)
        } else {
            let mut mapping = Mapping::new();
            if let Some(first) = self.first_child(node) {
                mapping.insert(
                    self.tag(first).to_string(),
                    GenericValue::Sequence(self.sequence(node)),
                );
            }
            mapping
        };
        for (name, value) in self.attributes(node) {
            mapping.insert(name.to_string(), value.into());
        }
        GenericValue::Mapping(mapping)
    }

    /// Only the first two children are inspected.
    fn is_record(&self, node: Node) -> bool {
        let mut children = self.children(node);
        match (children.next(), children.next()) {
            (Some(first), Some(second)) => {
                self.element(first).name() != self.element(second).name()
            }
            _ => true,
        }
    }

    fn record(&self, node: Node) -> Mapping {
        let mut mapping = self.attribute_mapping(node, false);
        for child in self.children(node) {
            let value = if self.has_children(child) {
                self.convert_branch(child)
            } else if self.element(child).attributes().is_empty() {
                self.text(child).into()
            } else {
                GenericValue::Mapping(self.attribute_mapping(child, true))
            };
            mapping.insert(self.tag(child).to_string(), value);
        }
        mapping
    }

    fn sequence(&self, node: Node) -> Vec<GenericValue> {
        let mut items = Vec::new();
        for child in self.children(node) {
            if self.has_children(child) {
                if self.is_record(child) {
                    items.push(GenericValue::Mapping(self.record(child)));
                } else {
                    items.push(GenericValue::Sequence(self.sequence(child)));
                }
            } else if let Some(text) = self.text(child) {
                let text = text.trim();
                if !text.is_empty() {
                    items.push(text.into());
                }
            }
        }
        items
    }

    fn attribute_mapping(&self, node: Node, sorted: bool) -> Mapping {
        let attributes = if sorted {
            self.sorted_attributes(node)
        } else {
            self.attributes(node).collect()
        };
        attributes
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.into()))
            .collect()
    }
}
