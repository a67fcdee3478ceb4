//! Annotations handed to the dashboard boundary.

/// A time-ranged, tagged marker describing one downtime interval.
///
/// Annotations are produced fresh for every request and never persisted;
/// their lifetime is the single response. Instants are Unix seconds — the
/// HTTP boundary converts to whatever the dashboard protocol expects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Start of the marked interval, Unix seconds.
    pub time: i64,

    /// End of the marked interval, Unix seconds.
    pub time_end: i64,

    /// Check display name.
    pub title: String,

    /// Check hostname.
    pub text: String,

    /// Composed tag set, lexicographically sorted, always containing "down".
    pub tags: Vec<String>,
}

impl Annotation {
    /// Start instant in epoch milliseconds.
    pub fn time_ms(&self) -> i64 {
        self.time * 1000
    }

    /// End instant in epoch milliseconds.
    pub fn time_end_ms(&self) -> i64 {
        self.time_end * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_millis_conversion() {
        let ann = Annotation {
            time: 1_294_235_764,
            time_end: 1_294_235_824,
            title: "web".to_string(),
            text: "example.com".to_string(),
            tags: vec!["down".to_string()],
        };

        assert_eq!(ann.time_ms(), 1_294_235_764_000);
        assert_eq!(ann.time_end_ms(), 1_294_235_824_000);
    }
}
