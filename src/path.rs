//! Paths address an element, and optionally one of its attributes, relative
//! to a starting element.
//!
//! The text form is a list of tag names separated by `/`, for instance
//! `alpha/bravo/charlie`. A tag followed by `+` always creates a new element
//! instead of reusing the first existing one with that name. A trailing
//! `@name` addresses an attribute of the element: `alpha/bravo@class`. An
//! empty path, or one that consists of `@name` only, addresses the starting
//! element itself.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::name::is_valid_name;

/// A single step in a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    tag: String,
    forced: bool,
}

impl Segment {
    /// A step that reuses the first child named `tag` if there is one.
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Segment {
            tag: tag.into(),
            forced: false,
        }
    }

    /// A step that always creates a new child named `tag`.
    pub fn forced<S: Into<String>>(tag: S) -> Self {
        Segment {
            tag: tag.into(),
            forced: true,
        }
    }

    fn parse(s: &str) -> Result<Self, Error> {
        let segment = match s.strip_suffix('+') {
            Some(tag) => Segment::forced(tag),
            None => Segment::new(s),
        };
        if segment.tag.is_empty() {
            return Err(Error::MalformedPath(format!("empty segment in {:?}", s)));
        }
        if !is_valid_name(&segment.tag) {
            return Err(Error::MalformedPath(format!(
                "illegal tag name {:?}",
                segment.tag
            )));
        }
        Ok(segment)
    }

    /// The tag name of this step.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this step always creates a new element.
    pub fn is_forced(&self) -> bool {
        self.forced
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        if self.forced {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// A parsed path.
///
/// ```rust
/// use xmlfactory::Path;
///
/// let path: Path = "components/component+/name@lang".parse()?;
/// assert_eq!(path.segments().len(), 3);
/// assert!(path.segments()[1].is_forced());
/// assert_eq!(path.attribute(), Some("lang"));
/// # Ok::<(), xmlfactory::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<Segment>,
    attribute: Option<String>,
}

impl Path {
    /// Build a path from its parts.
    pub fn new(segments: Vec<Segment>, attribute: Option<String>) -> Self {
        Path {
            segments,
            attribute,
        }
    }

    /// Parse a path from its text form.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let (element_path, attribute) = match s.rsplit_once('@') {
            Some((element_path, attribute)) => {
                if !is_valid_name(attribute) {
                    return Err(Error::MalformedPath(format!(
                        "illegal attribute name {:?} in {:?}",
                        attribute, s
                    )));
                }
                (element_path, Some(attribute.to_string()))
            }
            None => (s, None),
        };
        let segments = if element_path.is_empty() {
            Vec::new()
        } else {
            element_path
                .split('/')
                .map(Segment::parse)
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(Path {
            segments,
            attribute,
        })
    }

    /// The element steps of this path.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The attribute this path addresses, if any.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Whether the path addresses an attribute rather than an element.
    pub fn is_attribute(&self) -> bool {
        self.attribute.is_some()
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", segment)?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "@{}", attribute)?;
        }
        Ok(())
    }
}
