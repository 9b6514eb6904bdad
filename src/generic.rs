//! A generic value tree for XML converted to maps and lists.
//!
//! [`GenericValue`] is what [`XmlData::to_generic`](crate::XmlData::to_generic)
//! produces. It serializes through `serde`, so it can be written in any
//! format; [`GenericValue::to_json`] writes the JSON text existing consumers
//! expect.

use std::io;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::Error;

/// An insertion-ordered map of keys to values.
pub type Mapping = IndexMap<String, GenericValue>;

/// A string, nothing, a map or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericValue {
    /// Absent text.
    Null,
    String(String),
    Mapping(Mapping),
    Sequence(Vec<GenericValue>),
}

impl GenericValue {
    /// The string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The mapping, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            GenericValue::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// The items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[GenericValue]> {
        match self {
            GenericValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GenericValue::Null)
    }

    /// Look up a key, if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&GenericValue> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Serialize to JSON text.
    ///
    /// Items are separated by `", "` and keys from values by `": "`. Non-ASCII
    /// characters are written as `\u` escapes.
    ///
    /// ```rust
    /// use xmlfactory::{GenericValue, Mapping};
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("name".to_string(), GenericValue::from("Alpha"));
    /// mapping.insert("login".to_string(), GenericValue::Null);
    /// assert_eq!(
    ///     GenericValue::Mapping(mapping).to_json()?,
    ///     r#"{"name": "Alpha", "login": null}"#
    /// );
    /// # Ok::<(), xmlfactory::Error>(())
    /// ```
    pub fn to_json(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut serializer)?;
        // the formatter only ever writes ascii
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        GenericValue::String(s.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        GenericValue::String(s)
    }
}

impl From<Option<&str>> for GenericValue {
    fn from(s: Option<&str>) -> Self {
        s.map_or(GenericValue::Null, GenericValue::from)
    }
}

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GenericValue::Null => serializer.serialize_unit(),
            GenericValue::String(s) => serializer.serialize_str(s),
            GenericValue::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            GenericValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
