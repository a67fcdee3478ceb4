//! Monitored checks as reported by the uptime provider.

use core::fmt;

/// Identifier of a monitored check, assigned by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CheckId(pub u64);

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for CheckId {
    fn from(id: u64) -> Self {
        CheckId(id)
    }
}

/// A monitored endpoint tracked by the uptime provider.
///
/// Checks are read-only snapshots: the provider owns them, and a fresh copy
/// is fetched for every annotation request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Check {
    /// Provider-assigned identifier.
    pub id: CheckId,

    /// Display name of the check.
    pub name: String,

    /// Host the check targets. Filter patterns match against this field.
    pub hostname: String,

    /// Tag names attached to the check. Unordered, may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl Check {
    /// Create a check with no tags.
    pub fn new(id: impl Into<CheckId>, name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hostname: hostname.into(),
            tags: Vec::new(),
        }
    }

    /// Attach tag names to the check.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_construction() {
        let check = Check::new(42u64, "api", "api.example.com").with_tags(["prod", "edge"]);

        assert_eq!(check.id, CheckId(42));
        assert_eq!(check.name, "api");
        assert_eq!(check.hostname, "api.example.com");
        assert_eq!(check.tags, vec!["prod", "edge"]);
    }

    #[test]
    fn test_check_id_display() {
        assert_eq!(CheckId(85975).to_string(), "85975");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_check_deserialize_missing_tags() {
        let check: Check =
            serde_json::from_str(r#"{"id":1,"name":"web","hostname":"example.com"}"#).unwrap();

        assert_eq!(check.id, CheckId(1));
        assert!(check.tags.is_empty());
    }
}
