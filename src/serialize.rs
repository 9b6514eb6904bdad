use std::fs::File;
use std::io::{self, Read, Write};

use crate::access::NodeEdge;
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::xmldata::{Node, XmlData};

const INDENT: &str = "  ";

/// The declaration written before the document element on request.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" ?>\n";

/// ## Pretty printing
///
/// The output format is fixed:
///
/// - Every element starts on its own line, indented by two spaces per level.
/// - Attributes are written sorted by name.
/// - An element without children and without text is written as `<tag/>`.
/// - Text is written after the children, directly followed by the end tag.
/// - Without text, the end tag goes on its own line at the element's
///   indentation.
///
/// No newline follows the document element.
impl XmlData {
    /// Write `node` and its descendants to `w`, starting at `indent` levels
    /// of indentation.
    ///
    /// ```rust
    /// let mut data = xmlfactory::XmlData::new();
    /// let root = data.parse("<user><name>Alpha</name><roles/></user>")?;
    /// let mut buf = Vec::new();
    /// data.serialize_pretty(root, &mut buf, 0)?;
    /// assert_eq!(
    ///     String::from_utf8(buf).unwrap(),
    ///     "<user>\n  <name>Alpha</name>\n  <roles/>\n</user>"
    /// );
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn serialize_pretty<W: Write>(
        &self,
        node: Node,
        w: &mut W,
        indent: usize,
    ) -> Result<(), Error> {
        let mut depth = indent;
        for edge in self.traverse(node) {
            match edge {
                NodeEdge::Start(current) => {
                    if current != node {
                        w.write_all(b"\n")?;
                    }
                    write!(w, "{}<{}", INDENT.repeat(depth), self.tag(current))?;
                    for (name, value) in self.sorted_attributes(current) {
                        write!(w, " {}=\"{}\"", name, serialize_attribute(value))?;
                    }
                    if self.is_empty_element(current) {
                        w.write_all(b"/>")?;
                    } else {
                        w.write_all(b">")?;
                        depth += 1;
                    }
                }
                NodeEdge::End(current) => {
                    if self.is_empty_element(current) {
                        continue;
                    }
                    depth -= 1;
                    match self.text(current) {
                        Some(text) => w.write_all(serialize_text(text).as_bytes())?,
                        None => write!(w, "\n{}", INDENT.repeat(depth))?,
                    }
                    write!(w, "</{}>", self.tag(current))?;
                }
            }
        }
        Ok(())
    }

    /// Write `node` as a document, optionally preceded by [`XML_HEADER`].
    pub fn write_document<W: Write>(
        &self,
        node: Node,
        w: &mut W,
        xml_header: bool,
    ) -> Result<(), Error> {
        if xml_header {
            w.write_all(XML_HEADER.as_bytes())?;
        }
        self.serialize_pretty(node, w, 0)
    }

    /// Pretty print `node` to a string.
    pub fn to_pretty_string(&self, node: Node, xml_header: bool) -> String {
        let mut buf = Vec::new();
        // writing to a vec cannot fail
        let _ = self.write_document(node, &mut buf, xml_header);
        // tags, attributes and text are all strings, so this is valid utf-8
        String::from_utf8(buf)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

/// Parse XML from `input` and write it pretty printed to `output`.
///
/// ```rust
/// let mut output = Vec::new();
/// xmlfactory::write_pretty(&b"<a><b>x</b></a>"[..], &mut output)?;
/// assert_eq!(output, b"<a>\n  <b>x</b>\n</a>");
/// # Ok::<(), xmlfactory::Error>(())
/// ```
pub fn write_pretty<R: Read, W: Write>(input: R, output: &mut W) -> Result<(), Error> {
    let mut data = XmlData::new();
    let root = data.parse_reader(input)?;
    data.serialize_pretty(root, output, 0)
}

/// Parse XML from `input` and write it pretty printed to the file at
/// `output`, replacing its contents.
///
/// The file is created before the input is parsed, so a parse error leaves
/// it empty.
pub fn write_pretty_file<R: Read, P: AsRef<std::path::Path>>(
    input: R,
    output: P,
) -> Result<(), Error> {
    let output = output.as_ref();
    tracing::debug!(path = %output.display(), "writing pretty xml");
    let mut w = io::BufWriter::new(File::create(output)?);
    write_pretty(input, &mut w)?;
    w.flush()?;
    Ok(())
}
