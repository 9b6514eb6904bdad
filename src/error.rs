use std::fmt;

/// Errors produced while building, parsing or writing XML trees.
#[derive(Debug)]
pub enum Error {
    /// The root given to a factory is not usable as a document element.
    InvalidRootType(String),
    /// A path could not be parsed, or an attribute path was used where only
    /// element paths are allowed.
    MalformedPath(String),
    /// An entity was started with `&` but never terminated by `;`.
    UnclosedEntity(String),
    /// An entity that is neither predefined nor a character reference.
    InvalidEntity(String),
    /// An end tag does not match the element it closes.
    MismatchedEndTag { expected: String, found: String },
    /// The input ended while this element was still open.
    UnclosedElement(String),
    /// The input contains no document element.
    NoElement,
    /// The input bytes are not valid in the named encoding.
    Encoding(&'static str),
    /// The node does not belong to the tree it was used with.
    UnknownNode(String),
    /// Low-level tokenizer error.
    Parser(xmlparser::Error),
    /// Invalid tree operation.
    Node(indextree::NodeError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRootType(root) => {
                write!(f, "Unknown root element parameter: {:?}", root)
            }
            Error::MalformedPath(message) => write!(f, "Malformed path: {}", message),
            Error::UnclosedEntity(entity) => write!(f, "Unclosed entity: &{}", entity),
            Error::InvalidEntity(entity) => write!(f, "Invalid entity: &{};", entity),
            Error::MismatchedEndTag { expected, found } => write!(
                f,
                "End tag </{}> does not match start tag <{}>",
                found, expected
            ),
            Error::UnclosedElement(tag) => write!(f, "Element <{}> is not closed", tag),
            Error::NoElement => write!(f, "Document has no element"),
            Error::Encoding(encoding) => write!(f, "Input is not valid {}", encoding),
            Error::UnknownNode(node) => write!(f, "Node {} is not part of this tree", node),
            Error::Parser(e) => write!(f, "Parser error: {}", e),
            Error::Node(e) => write!(f, "Node error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parser(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Node(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
