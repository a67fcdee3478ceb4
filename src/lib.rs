//! # pingwatch
//!
//! Bridges Pingdom-style uptime-check history into two dashboard-facing
//! representations: Grafana SimpleJSON annotations marking outage intervals,
//! and a declared Prometheus metric catalog describing check health.
//!
//! The core is [`annotations::AnnotationEngine`]: given a time window and an
//! optional hostname filter, it lists the monitored checks, fetches each
//! check's outage history, and emits one tagged annotation per "down"
//! interval — tolerating per-check provider failures without failing the
//! whole request.

pub mod annotations;
pub mod config;
pub mod metrics;
pub mod server;

pub use annotations::{AnnotateError, AnnotationEngine};

// Re-export the data model for convenience
pub use pingwatch_provider::{CheckProvider, ProviderError};
pub use pingwatch_types::{Annotation, Check, CheckId, OutageSummary, QueryWindow};
