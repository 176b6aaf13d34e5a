//! Access permissions derived from attribute options

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Accessor an attribute exposes on constructed instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Read access
    Reader,

    /// Write access
    Writer,
}

impl Permission {
    /// Lowercase name (`reader` / `writer`)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Writer => "writer",
        }
    }

    /// Suffix an accessor generator appends to the attribute name
    ///
    /// `foo` for a reader, `foo=` for a writer.
    #[inline]
    #[must_use]
    pub fn accessor_suffix(self) -> &'static str {
        match self {
            Self::Reader => "",
            Self::Writer => "=",
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_serde_are_lowercase() {
        assert_eq!(Permission::Reader.to_string(), "reader");
        assert_eq!(serde_json::to_string(&Permission::Writer).unwrap(), "\"writer\"");
    }

    #[test]
    fn reader_sorts_before_writer() {
        assert!(Permission::Reader < Permission::Writer);
    }

    #[test]
    fn accessor_suffixes() {
        assert_eq!(Permission::Reader.accessor_suffix(), "");
        assert_eq!(Permission::Writer.accessor_suffix(), "=");
    }
}
