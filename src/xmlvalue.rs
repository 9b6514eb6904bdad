use indexmap::IndexMap;

use crate::name::NameId;

/// A map of NameId to String for attributes, in insertion order.
pub type Attributes = IndexMap<NameId, String>;

/// XML element value.
///
/// Example: `<foo/>`, `<foo bar="baz"/>` or `<foo>text</foo>`.
///
/// The name of an element is fixed when it is created. Text is tracked
/// separately from child elements: an element may have both, in which case
/// the text is written after the children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) attributes: Attributes,
    pub(crate) text: Option<String>,
}

impl Element {
    pub(crate) fn new(name_id: NameId) -> Self {
        Element {
            name_id,
            attributes: Attributes::new(),
            text: None,
        }
    }

    /// The name of the element.
    ///
    /// ```rust
    /// use xmlfactory::XmlData;
    ///
    /// let mut data = XmlData::new();
    /// let root = data.parse("<doc/>")?;
    /// let name_doc = data.name("doc").unwrap();
    /// assert_eq!(data.element(root).name(), name_doc);
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The attributes of the element, in the order they were first set.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name_id: NameId) -> Option<&str> {
        self.attributes.get(&name_id).map(|s| s.as_str())
    }

    /// Set an attribute value, replacing any previous value.
    pub fn set_attribute<S: Into<String>>(&mut self, name_id: NameId, value: S) {
        self.attributes.insert(name_id, value.into());
    }

    /// The text of the element, if any was set.
    ///
    /// `None` and `Some("")` differ: the first renders as `<a/>`, the second
    /// as `<a></a>`.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text, replacing any previous text.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = Some(text.into());
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }
}
