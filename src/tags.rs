use indexmap::IndexMap;
use std::fmt;

/// The tag mapping of a game record. Keyed by tag name; iteration order is
/// insertion order, which the dialog preserves when listing extra tags.
pub type TagMap = IndexMap<String, TagValue>;

/// A value in a game record's tag mapping. Most PGN tags are plain text; a
/// few carry structured data (online rating details) that must survive an
/// edit session untouched. Only `Text` values round-trip through the
/// free-form tag editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    Rating(RatingDetail),
}

/// An online-server rating with its uncertainty info, as seen in tags such
/// as lichess's rating exports. Not editable through the tag table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDetail {
    pub rating: i32,
    pub deviation: i32,
    pub provisional: bool,
}

impl TagValue {
    pub fn text(s: impl Into<String>) -> Self {
        TagValue::Text(s.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, TagValue::Text(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            TagValue::Rating(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TagValue::Text(_) => "text",
            TagValue::Rating(_) => "rating",
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Rating(r) => {
                if r.provisional {
                    write!(f, "{}?", r.rating)
                } else {
                    write!(f, "{}", r.rating)
                }
            }
        }
    }
}

/// One editable row in the free-form tag table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRow {
    pub name: String,
    pub value: String,
}

impl TagRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
