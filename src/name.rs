use crate::idmap::{IdIndex, IdMap};

/// Interned tag or attribute name.
///
/// Obtain one with [`XmlData::add_name`](crate::XmlData::add_name) or look up
/// an existing one with [`XmlData::name`](crate::XmlData::name).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NameId(u32);

impl IdIndex<NameId> for NameId {
    fn to_id(index: usize) -> NameId {
        NameId(index as u32)
    }

    fn from_id(id: NameId) -> usize {
        id.0 as usize
    }
}

pub(crate) type NameLookup = IdMap<NameId, String>;

/// Characters that have a meaning in paths or in markup and therefore never
/// appear in a name.
const RESERVED: &[char] = &['/', '@', '+', '<', '>', '&', '"', '\'', '='];

/// Whether `name` can be used as a tag or attribute name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || RESERVED.contains(&c))
}

/// Whether `name` can start a document; stricter than [`is_valid_name`] as a
/// document element must not start with a digit, `-` or `.`.
pub(crate) fn is_valid_root_name(name: &str) -> bool {
    is_valid_name(name)
        && !name
            .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
}
