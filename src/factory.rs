use std::fs::File;
use std::io::{self, Read, Write};

use crate::error::Error;
use crate::generic::GenericValue;
use crate::name::is_valid_root_name;
use crate::path::Path;
use crate::xmldata::{Node, XmlData};

/// Builds an XML document from slash-separated paths.
///
/// Intermediate elements are created as needed, and looking up a path creates
/// it too. A segment ending in `+` always adds a new element, and a trailing
/// `@name` addresses an attribute. See [`Path`] for the syntax.
///
/// ```rust
/// use xmlfactory::Factory;
///
/// let mut factory = Factory::new("user")?;
/// factory.set("name", "Alpha")?;
/// factory.set("login", "Bravo")?;
/// factory.set("location/city", "Charlie")?;
/// factory.set("location@kind", "home")?;
///
/// assert_eq!(
///     factory.contents(false),
///     "<user>\n  <name>Alpha</name>\n  <login>Bravo</login>\n  <location kind=\"home\">\n    <city>Charlie</city>\n  </location>\n</user>"
/// );
/// # Ok::<(), xmlfactory::Error>(())
/// ```
pub struct Factory {
    data: XmlData,
    root: Node,
}

impl Factory {
    /// Start a new document with a root element named `tag`.
    ///
    /// Fails with [`Error::InvalidRootType`] if `tag` cannot name a document
    /// element.
    pub fn new(tag: &str) -> Result<Self, Error> {
        if !is_valid_root_name(tag) {
            return Err(Error::InvalidRootType(tag.to_string()));
        }
        let mut data = XmlData::new();
        let root = data.new_element_named(tag);
        Ok(Factory { data, root })
    }

    /// Wrap an existing tree, rooted at `root`.
    ///
    /// Fails with [`Error::InvalidRootType`] if `root` is not a node of
    /// `data`.
    pub fn from_tree(data: XmlData, root: Node) -> Result<Self, Error> {
        if !data.contains(root) {
            return Err(Error::InvalidRootType(format!("{:?}", root)));
        }
        Ok(Factory { data, root })
    }

    /// Parse a document from a string.
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut data = XmlData::new();
        let root = data.parse(xml)?;
        Ok(Factory { data, root })
    }

    /// Parse a document from bytes, detecting their encoding.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut data = XmlData::new();
        let root = data.parse_bytes(bytes)?;
        Ok(Factory { data, root })
    }

    /// Parse a document read from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut data = XmlData::new();
        let root = data.parse_reader(reader)?;
        Ok(Factory { data, root })
    }

    /// Parse the document in the file at `path`.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading xml");
        Self::from_reader(io::BufReader::new(File::open(path)?))
    }

    /// The root element.
    pub fn root(&self) -> Node {
        self.root
    }

    /// Read access to the tree.
    pub fn data(&self) -> &XmlData {
        &self.data
    }

    /// Give up the factory, returning the tree and its root.
    pub fn into_parts(self) -> (XmlData, Node) {
        (self.data, self.root)
    }

    /// A handle on a node of this factory's tree.
    ///
    /// Fails with [`Error::UnknownNode`] if `node` is not part of it.
    pub fn handle(&mut self, node: Node) -> Result<Handle<'_>, Error> {
        if !self.data.contains(node) {
            return Err(Error::UnknownNode(format!("{:?}", node)));
        }
        Ok(Handle {
            data: &mut self.data,
            node,
        })
    }

    /// Get the element at `path`, creating it if needed.
    ///
    /// Attribute paths are rejected with [`Error::MalformedPath`]; use
    /// [`Factory::set`] for attributes.
    pub fn get_or_create(&mut self, path: &str) -> Result<Handle<'_>, Error> {
        let root = self.root;
        self.handle(root)?.into_child(path)
    }

    /// Set the text of the element at `path`, or the value of the attribute
    /// when the path ends with `@name`. Returns the element, which for an
    /// attribute is its owner.
    pub fn set<V: ToString>(&mut self, path: &str, value: V) -> Result<Node, Error> {
        let root = self.root;
        self.handle(root)?.set(path, value)
    }

    /// The document as pretty printed text.
    pub fn contents(&self, xml_header: bool) -> String {
        self.data.to_pretty_string(self.root, xml_header)
    }

    /// Write the pretty printed document to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W, xml_header: bool) -> Result<(), Error> {
        self.data.write_document(self.root, w, xml_header)
    }

    /// Write the pretty printed document to the file at `path`, replacing
    /// its contents.
    pub fn write_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        xml_header: bool,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "writing xml");
        let mut w = io::BufWriter::new(File::create(path)?);
        self.write_to(&mut w, xml_header)?;
        w.flush()?;
        Ok(())
    }

    /// The document converted to maps and lists.
    pub fn as_mapping(&self) -> GenericValue {
        self.data.to_generic(self.root)
    }

    /// The document converted to maps and lists, as JSON text.
    pub fn as_json(&self) -> Result<String, Error> {
        self.as_mapping().to_json()
    }
}

/// A node in a [`Factory`]'s tree, through which paths can be resolved
/// relative to that node.
///
/// ```rust
/// use xmlfactory::Factory;
///
/// let mut factory = Factory::new("root")?;
/// let mut triggers = factory.get_or_create("triggers")?;
/// triggers.set("@class", "vector")?;
/// triggers.get_or_create("spec")?.set("", "daily")?;
/// assert_eq!(
///     factory.contents(false),
///     "<root>\n  <triggers class=\"vector\">\n    <spec>daily</spec>\n  </triggers>\n</root>"
/// );
/// # Ok::<(), xmlfactory::Error>(())
/// ```
pub struct Handle<'a> {
    data: &'a mut XmlData,
    node: Node,
}

impl<'a> Handle<'a> {
    /// The node this handle is on.
    pub fn node(&self) -> Node {
        self.node
    }

    /// Read access to the tree.
    pub fn data(&self) -> &XmlData {
        &*self.data
    }

    /// A shorter-lived handle on the same node.
    pub fn reborrow(&mut self) -> Handle<'_> {
        Handle {
            data: &mut *self.data,
            node: self.node,
        }
    }

    /// Get the element at `path` below this one, creating it if needed.
    pub fn get_or_create(&mut self, path: &str) -> Result<Handle<'_>, Error> {
        self.reborrow().into_child(path)
    }

    /// Like [`Handle::get_or_create`], consuming this handle so the result
    /// keeps the full lifetime.
    pub fn into_child(self, path: &str) -> Result<Handle<'a>, Error> {
        let path = Path::parse(path)?;
        if path.is_attribute() {
            return Err(Error::MalformedPath(format!(
                "{}: the \"at\" (@) is used for attribute definitions",
                path
            )));
        }
        let node = self.data.resolve(self.node, &path)?.node();
        Ok(Handle {
            data: self.data,
            node,
        })
    }

    /// Set the text or attribute at `path` below this element.
    pub fn set<V: ToString>(&mut self, path: &str, value: V) -> Result<Node, Error> {
        let path = Path::parse(path)?;
        self.data.assign(self.node, &path, value.to_string())
    }

    /// The tree under this node as pretty printed text, indented as if it
    /// was the document element.
    pub fn contents(&self) -> String {
        self.data.to_pretty_string(self.node, false)
    }
}
