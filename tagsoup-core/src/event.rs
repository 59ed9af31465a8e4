//! Tokenizer events - the output of the boundary scanner.
//!
//! This is a SAX-style model: one event per recognized token, delivered in
//! document order. Nothing is nested or balanced; an `EndTag` is emitted for
//! every literal `</...>` whether or not a matching `StartTag` was seen.
//!
//! Handlers receive borrowed data (see [`crate::Handler`]). `Event` is the
//! owned form used by collectors, closure handlers and tests.

use std::fmt;

/// A start-tag attribute.
///
/// `name` is lower-cased. `value` is raw text with surrounding quotes removed;
/// a bare attribute (`disabled`) has an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Owned tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `<name attr=value ...>`
    ///
    /// Attributes keep source order and are not deduplicated.
    StartTag { name: String, attrs: Vec<Attribute> },

    /// `</name>`
    EndTag { name: String },

    /// Text between tags (whitespace-collapsed), or the verbatim body of an
    /// opaque element such as `script`.
    Data { text: String },

    /// Interior of `<!-- ... -->`, unprocessed.
    Comment { text: String },

    /// Interior of `<! ... >`, unprocessed (doctype and friends).
    Declaration { text: String },
}

impl Event {
    /// Tag name for start and end tags.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Event::StartTag { name, .. } | Event::EndTag { name } => Some(name),
            _ => None,
        }
    }

    /// Text payload for data, comment and declaration events.
    pub fn text(&self) -> Option<&str> {
        match self {
            Event::Data { text } | Event::Comment { text } | Event::Declaration { text } => {
                Some(text)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_start_tag(&self) -> bool {
        matches!(self, Event::StartTag { .. })
    }

    #[inline]
    pub fn is_end_tag(&self) -> bool {
        matches!(self, Event::EndTag { .. })
    }

    #[inline]
    pub fn is_data(&self) -> bool {
        matches!(self, Event::Data { .. })
    }

    /// Short name of the variant, used in line formats.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::StartTag { .. } => "StartTag",
            Event::EndTag { .. } => "EndTag",
            Event::Data { .. } => "Data",
            Event::Comment { .. } => "Comment",
            Event::Declaration { .. } => "Declaration",
        }
    }
}

/// One line per event: `StartTag "a" [href="x", disabled=""]`, `Data "text"`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::StartTag { name, attrs } => {
                write!(f, "StartTag {:?}", name)?;
                if !attrs.is_empty() {
                    f.write_str(" [")?;
                    for (i, attr) in attrs.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}={:?}", attr.name, attr.value)?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
            Event::EndTag { name } => write!(f, "EndTag {:?}", name),
            Event::Data { text } | Event::Comment { text } | Event::Declaration { text } => {
                write!(f, "{} {:?}", self.kind(), text)
            }
        }
    }
}
