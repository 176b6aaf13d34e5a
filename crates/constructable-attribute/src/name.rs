//! Attribute names and their storage keys

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Sigil prepended to a name to form its storage key
pub const STORAGE_SIGIL: char = '@';

/// Identifier of one attribute
///
/// Used as the lookup key into input mappings and as the basis for the
/// storage key a construction layer persists the resolved value under.
///
/// # Example
/// ```
/// use constructable_attribute::AttributeName;
///
/// let name = AttributeName::new("foo");
/// assert_eq!(name.as_str(), "foo");
/// assert_eq!(name.storage_key(), "@foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeName(String);

impl AttributeName {
    /// Create a name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name as written
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key: the name prefixed with [`STORAGE_SIGIL`]
    #[must_use]
    pub fn storage_key(&self) -> String {
        let mut key = String::with_capacity(self.0.len() + 1);
        key.push(STORAGE_SIGIL);
        key.push_str(&self.0);
        key
    }
}

impl Display for AttributeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for AttributeName {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_prefixes_sigil() {
        assert_eq!(AttributeName::new("foo").storage_key(), "@foo");
        assert_eq!(AttributeName::new("readable_option").storage_key(), "@readable_option");
    }

    #[test]
    fn display_is_bare_name() {
        assert_eq!(AttributeName::from("foo").to_string(), "foo");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&AttributeName::new("foo")).unwrap();
        assert_eq!(json, "\"foo\"");
    }
}
