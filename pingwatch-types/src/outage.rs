//! Outage history and raw probe results.

use core::fmt;

/// Status label of an outage state or probe result.
///
/// The provider reports a small closed set of labels; anything unrecognized
/// maps to [`OutageStatus::Unknown`] rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutageStatus {
    /// The check was reachable.
    Up,
    /// The check was down. Only these states become annotations.
    Down,
    /// Status could not be determined.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl OutageStatus {
    /// Whether this state marks an outage.
    pub fn is_down(&self) -> bool {
        matches!(self, OutageStatus::Down)
    }
}

impl fmt::Display for OutageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutageStatus::Up => "up",
            OutageStatus::Down => "down",
            OutageStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A time-bounded status interval reported for one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutageState {
    /// Status during the interval.
    pub status: OutageStatus,

    /// Interval start, Unix seconds.
    pub from: i64,

    /// Interval end, Unix seconds.
    pub to: i64,
}

/// Outage history for one check over one query window.
///
/// States are kept in the order the provider reported them; the annotation
/// engine relies on that order being preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutageSummary {
    pub states: Vec<OutageState>,
}

impl OutageSummary {
    /// Summary over the given states.
    pub fn new(states: Vec<OutageState>) -> Self {
        Self { states }
    }

    /// Number of "down" states in the summary.
    pub fn down_count(&self) -> usize {
        self.states.iter().filter(|s| s.status.is_down()).count()
    }
}

/// One raw probe result for a check.
///
/// Carried for the provider's results capability; not consumed by the
/// annotation path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
    /// When the probe ran, Unix seconds.
    pub time: i64,

    /// Probe outcome.
    pub status: OutageStatus,

    /// Response time in milliseconds, when the probe completed.
    pub response_time_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_count() {
        let summary = OutageSummary::new(vec![
            OutageState { status: OutageStatus::Up, from: 0, to: 10 },
            OutageState { status: OutageStatus::Down, from: 10, to: 20 },
            OutageState { status: OutageStatus::Down, from: 30, to: 40 },
        ]);

        assert_eq!(summary.down_count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_status_unknown_fallback() {
        let status: OutageStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, OutageStatus::Unknown);

        let status: OutageStatus = serde_json::from_str("\"down\"").unwrap();
        assert!(status.is_down());
    }
}
