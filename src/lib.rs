#![forbid(unsafe_code)]

//! Build XML documents by assigning values to slash-separated paths.
//!
//! ```rust
//! use xmlfactory::Factory;
//!
//! let mut factory = Factory::new("root")?;
//! factory.set("elements/name", "Alpha")?;
//! factory.set("elements/name+", "Bravo")?;
//! factory.set("elements@kind", "names")?;
//!
//! assert_eq!(
//!     factory.contents(true),
//!     concat!(
//!         "<?xml version=\"1.0\" ?>\n",
//!         "<root>\n",
//!         "  <elements kind=\"names\">\n",
//!         "    <name>Alpha</name>\n",
//!         "    <name>Bravo</name>\n",
//!         "  </elements>\n",
//!         "</root>"
//!     )
//! );
//! assert_eq!(
//!     factory.as_json()?,
//!     r#"{"elements": {"name": ["Alpha", "Bravo"], "kind": "names"}}"#
//! );
//! # Ok::<(), xmlfactory::Error>(())
//! ```
//!
//! The tree itself lives in [`XmlData`], which can also parse existing
//! documents; [`write_pretty`] reformats a document in the same canonical
//! layout [`Factory::contents`] produces.

mod access;
mod convert;
mod creation;
mod encoding;
mod entity;
mod error;
mod factory;
mod generic;
mod idmap;
mod manipulation;
mod name;
mod parse;
mod path;
mod resolve;
mod serialize;
mod xmldata;
mod xmlvalue;

pub use access::NodeEdge;
pub use error::Error;
pub use factory::{Factory, Handle};
pub use generic::{GenericValue, Mapping};
pub use name::NameId;
pub use path::{Path, Segment};
pub use resolve::Target;
pub use serialize::{write_pretty, write_pretty_file, XML_HEADER};
pub use xmldata::{Node, XmlData};
pub use xmlvalue::{Attributes, Element};
