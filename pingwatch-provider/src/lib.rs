//! # pingwatch-provider
//!
//! Provider clients for fetching uptime-check history.
//!
//! The annotation engine talks to the monitoring provider through the
//! [`CheckProvider`] trait, so it can be exercised against a fake in tests.
//! The one concrete implementation is [`pingdom::PingdomClient`], which
//! speaks the Pingdom REST API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pingwatch_provider::{CheckProvider, pingdom::PingdomClient};
//! use pingwatch_types::QueryWindow;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PingdomClient::builder()
//!         .credentials("ops@example.com", "hunter2")
//!         .api_key("app-key")
//!         .build();
//!
//!     let checks = client.list_checks(true).await?;
//!     for check in &checks {
//!         let summary = client
//!             .outage_summary(check.id, QueryWindow::new(1_293_143_523, 1_294_237_910))
//!             .await?;
//!         println!("{}: {} down states", check.hostname, summary.down_count());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pingdom;

pub use error::ProviderError;

use async_trait::async_trait;
use pingwatch_types::{Check, CheckId, CheckResult, OutageSummary, QueryWindow};

/// Capability interface onto the monitoring provider.
///
/// One method per provider call the service needs: listing checks, outage
/// history for a window, and raw probe results. Implementations own all
/// authentication and connection details.
#[async_trait]
pub trait CheckProvider: Send + Sync {
    /// List all monitored checks, optionally with tag metadata included.
    async fn list_checks(&self, include_tags: bool) -> Result<Vec<Check>, ProviderError>;

    /// Fetch the outage summary for one check over the given window.
    async fn outage_summary(
        &self,
        id: CheckId,
        window: QueryWindow,
    ) -> Result<OutageSummary, ProviderError>;

    /// Fetch raw probe results for one check over the given window.
    async fn results(
        &self,
        id: CheckId,
        window: QueryWindow,
    ) -> Result<Vec<CheckResult>, ProviderError>;
}
