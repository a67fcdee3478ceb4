//! The declared metric catalog and its Prometheus exposition.
//!
//! Five gauge descriptors describe check health: alert threshold, status,
//! last-error and last-test timestamps, and last response duration. The
//! catalog is process-wide constant data. Value population is intentionally
//! absent: [`collect`] yields no samples, so the exposition carries only the
//! HELP/TYPE headers. The descriptors stay advertised so scrapers see a
//! stable contract.

/// A declared name/label schema for one measurable quantity, independent of
/// whether values are currently populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// Fully qualified metric name.
    pub name: &'static str,
    /// Human-readable description for the HELP line.
    pub help: &'static str,
    /// Label names every sample of this metric must carry.
    pub labels: &'static [&'static str],
}

/// One sampled value for a declared metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// Name of the descriptor this sample belongs to.
    pub name: &'static str,
    /// Label values, paired with the descriptor's label names.
    pub labels: Vec<(&'static str, String)>,
    /// Gauge value.
    pub value: f64,
}

/// The fixed catalog of declared check-health gauges.
pub const DESCRIPTORS: [MetricDescriptor; 5] = [
    MetricDescriptor {
        name: "pingdom_check_response_threshold_seconds",
        help: "The alert threshold for this check",
        labels: &["name", "hostname"],
    },
    MetricDescriptor {
        name: "pingdom_check_status_bool",
        help: "Whether the check is currently in the given status",
        labels: &["name", "hostname", "status"],
    },
    MetricDescriptor {
        name: "pingdom_check_last_error_timestamp",
        help: "Timestamp of the last error from a check",
        labels: &["name", "hostname"],
    },
    MetricDescriptor {
        name: "pingdom_check_last_test_timestamp",
        help: "Timestamp of the last test",
        labels: &["name", "hostname"],
    },
    MetricDescriptor {
        name: "pingdom_check_response_duration_seconds",
        help: "Time taken for the last check",
        labels: &["name", "hostname"],
    },
];

/// Advertise the declared descriptors. Idempotent and side-effect free.
pub fn describe() -> &'static [MetricDescriptor] {
    &DESCRIPTORS
}

/// Collect current samples for the declared descriptors.
///
/// Currently contributes no samples; the catalog is declared but not
/// populated.
pub fn collect() -> Vec<MetricSample> {
    Vec::new()
}

/// Render the catalog in Prometheus text exposition format.
pub fn render_exposition() -> String {
    let mut output = String::new();

    for descriptor in describe() {
        output.push_str(&format!("# HELP {} {}\n", descriptor.name, descriptor.help));
        output.push_str(&format!("# TYPE {} gauge\n", descriptor.name));
    }

    for sample in collect() {
        let labels = sample
            .labels
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, escape_label_value(value)))
            .collect::<Vec<_>>()
            .join(",");
        output.push_str(&format!("{}{{{}}} {}\n", sample.name, labels, sample.value));
    }

    output
}

/// Escape a label value for Prometheus format.
/// Backslash, double-quote, and newline must be escaped.
fn escape_label_value(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_idempotent() {
        let first = describe();
        let second = describe();

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptor_names_and_labels() {
        let names: Vec<_> = describe().iter().map(|d| d.name).collect();

        assert_eq!(
            names,
            vec![
                "pingdom_check_response_threshold_seconds",
                "pingdom_check_status_bool",
                "pingdom_check_last_error_timestamp",
                "pingdom_check_last_test_timestamp",
                "pingdom_check_response_duration_seconds",
            ]
        );

        for descriptor in describe() {
            assert!(descriptor.labels.contains(&"name"));
            assert!(descriptor.labels.contains(&"hostname"));
        }
        assert!(describe()[1].labels.contains(&"status"));
    }

    #[test]
    fn test_collect_is_empty() {
        assert!(collect().is_empty());
    }

    #[test]
    fn test_exposition_has_headers_and_no_samples() {
        let output = render_exposition();

        for descriptor in describe() {
            assert!(output.contains(&format!("# HELP {} ", descriptor.name)));
            assert!(output.contains(&format!("# TYPE {} gauge", descriptor.name)));
        }

        // Header lines only; no sample lines while collection is unpopulated.
        assert!(output.lines().all(|line| line.starts_with('#')));
    }

    #[test]
    fn test_escape_label_value() {
        assert_eq!(escape_label_value("simple"), "simple");
        assert_eq!(escape_label_value("with\"quote"), "with\\\"quote");
        assert_eq!(escape_label_value("with\\backslash"), "with\\\\backslash");
        assert_eq!(escape_label_value("with\nnewline"), "with\\nnewline");
    }
}
