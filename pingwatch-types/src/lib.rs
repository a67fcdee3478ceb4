//! # pingwatch-types
//!
//! Core types for bridging uptime-check history into dashboard annotations.
//!
//! This crate defines the data model shared by the provider clients and the
//! annotation engine: monitored checks, query windows, outage history, raw
//! probe results, and the annotation records handed to the dashboard
//! boundary.
//!
//! ## Features
//!
//! - `serde`: JSON serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use pingwatch_types::{Check, CheckId, QueryWindow};
//!
//! let check = Check {
//!     id: CheckId(85975),
//!     name: "My check".to_string(),
//!     hostname: "example.com".to_string(),
//!     tags: vec!["prod".to_string()],
//! };
//!
//! let window = QueryWindow::new(1_293_143_523, 1_294_237_910);
//! assert!(window.contains(1_293_500_000));
//! assert_eq!(check.hostname, "example.com");
//! ```

mod annotation;
mod check;
mod outage;
mod window;

pub use annotation::*;
pub use check::*;
pub use outage::*;
pub use window::*;
