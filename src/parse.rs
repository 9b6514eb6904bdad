use std::borrow::Cow;
use std::io::Read;

use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::encoding::decode;
use crate::entity::parse_entities;
use crate::error::Error;
use crate::xmldata::{Node, XmlData};

struct TreeBuilder<'d> {
    data: &'d mut XmlData,
    open: Vec<Node>,
    pending: Option<Node>,
    root: Option<Node>,
    space: String,
}

impl<'d> TreeBuilder<'d> {
    fn new(data: &'d mut XmlData) -> Self {
        TreeBuilder {
            data,
            open: Vec::new(),
            pending: None,
            root: None,
            space: String::new(),
        }
    }

    fn element_start(&mut self, tag: &str) -> Result<(), Error> {
        // whitespace before a child element is layout
        self.space.clear();
        let node = self.data.new_element_named(tag);
        match self.open.last() {
            Some(parent) => self.data.append(*parent, node)?,
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
        self.pending = Some(node);
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let value = parse_entities(value)?;
        if let Some(node) = self.pending {
            self.data.set_attribute(node, name, value);
        }
        Ok(())
    }

    fn open_element(&mut self) {
        if let Some(node) = self.pending.take() {
            self.open.push(node);
        }
    }

    fn empty_element(&mut self) {
        self.pending = None;
    }

    fn close_element(&mut self, tag: &str) -> Result<(), Error> {
        self.flush_space();
        let node = self.open.pop().ok_or(Error::NoElement)?;
        let expected = self.data.tag(node);
        if expected != tag {
            return Err(Error::MismatchedEndTag {
                expected: expected.to_string(),
                found: tag.to_string(),
            });
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), Error> {
        if text.trim().is_empty() {
            // held back until we know whether a child element follows
            if !self.open_has_children() {
                self.space.push_str(text);
            }
            return Ok(());
        }
        let text = parse_entities(text)?;
        self.cdata(&text);
        Ok(())
    }

    fn cdata(&mut self, text: &str) {
        self.flush_space();
        self.push_text(text);
    }

    fn open_has_children(&self) -> bool {
        self.open
            .last()
            .map(|node| self.data.has_children(*node))
            .unwrap_or(false)
    }

    fn flush_space(&mut self) {
        if !self.space.is_empty() {
            let space = std::mem::take(&mut self.space);
            self.push_text(&space);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(node) = self.open.last() {
            self.data.element_mut(*node).push_text(text);
        }
    }

    fn finish(self) -> Result<Node, Error> {
        if let Some(node) = self.open.last() {
            return Err(Error::UnclosedElement(self.data.tag(*node).to_string()));
        }
        self.root.ok_or(Error::NoElement)
    }
}

fn qualified<'a>(prefix: StrSpan<'a>, local: StrSpan<'a>) -> Cow<'a, str> {
    if prefix.as_str().is_empty() {
        local.as_str().into()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str()).into()
    }
}

/// ## Parsing
///
/// Namespaces are not interpreted: a prefixed name is kept as an opaque
/// `prefix:local` tag. Comments, processing instructions and DTD content are
/// skipped. Text and CDATA sections are collected into the text of the
/// enclosing element. Whitespace-only text next to child elements is layout
/// and dropped; in an element without children it is kept.
impl XmlData {
    /// Parse a string containing XML into a new tree, returning its root.
    ///
    /// ```rust
    /// let mut data = xmlfactory::XmlData::new();
    /// let root = data.parse(r#"<root a="&lt;1&gt;"><b>text</b></root>"#)?;
    /// assert_eq!(data.tag(root), "root");
    /// assert_eq!(data.attribute(root, "a"), Some("<1>"));
    /// let b = data.first_child(root).unwrap();
    /// assert_eq!(data.text(b), Some("text"));
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn parse(&mut self, xml: &str) -> Result<Node, Error> {
        let mut builder = TreeBuilder::new(self);
        for token in Tokenizer::from(xml) {
            match token? {
                Token::ElementStart { prefix, local, .. } => {
                    builder.element_start(&qualified(prefix, local))?;
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(&qualified(prefix, local), value.as_str())?;
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open => builder.open_element(),
                    ElementEnd::Empty => builder.empty_element(),
                    ElementEnd::Close(prefix, local) => {
                        builder.close_element(&qualified(prefix, local))?;
                    }
                },
                Token::Text { text } => builder.text(text.as_str())?,
                Token::Cdata { text, .. } => builder.cdata(text.as_str()),
                _ => {}
            }
        }
        let root = builder.finish()?;
        tracing::debug!(tag = self.tag(root), "parsed document");
        Ok(root)
    }

    /// Parse XML bytes into a new tree. The encoding is detected from the
    /// data, falling back to UTF-8.
    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<Node, Error> {
        self.parse(&decode(bytes)?)
    }

    /// Read XML from a reader and parse it into a new tree.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<Node, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.parse_bytes(&bytes)
    }
}
