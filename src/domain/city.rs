use serde::{Deserialize, Serialize};

/// A selectable city, unique by `code`.
///
/// City lists are supplied as an ordered sequence and rendered in the order
/// given; nothing in this crate re-sorts them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub code: String,
    pub name: String,
}

impl City {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
