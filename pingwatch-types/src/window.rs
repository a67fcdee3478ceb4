//! Query windows over outage history.

/// The time range an annotation request covers.
///
/// Bounds are Unix seconds and both ends are inclusive, following the
/// provider's convention for outage-summary requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryWindow {
    /// Start of the window, Unix seconds.
    pub from: i64,

    /// End of the window, Unix seconds.
    pub to: i64,
}

impl QueryWindow {
    /// Create a window from inclusive Unix-second bounds.
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Whether an instant falls inside the window.
    pub fn contains(&self, instant: i64) -> bool {
        instant >= self.from && instant <= self.to
    }

    /// Window length in seconds. Zero for inverted bounds.
    pub fn duration_secs(&self) -> i64 {
        (self.to - self.from).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let window = QueryWindow::new(100, 200);

        assert!(window.contains(100));
        assert!(window.contains(200));
        assert!(window.contains(150));
        assert!(!window.contains(99));
        assert!(!window.contains(201));
    }

    #[test]
    fn test_duration() {
        assert_eq!(QueryWindow::new(100, 160).duration_secs(), 60);
        assert_eq!(QueryWindow::new(160, 100).duration_secs(), 0);
    }
}
