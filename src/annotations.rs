//! The outage-to-annotation engine.
//!
//! One annotation request runs filter → fan-out → assemble: compile the
//! filter pattern, list the monitored checks, fetch each surviving check's
//! outage history for the query window, and turn every "down" interval into
//! one tagged annotation. A check whose outage fetch fails is skipped with a
//! warning; the rest of the response is still produced.

use futures_util::future;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

use pingwatch_provider::{CheckProvider, ProviderError};
use pingwatch_types::{Annotation, Check, QueryWindow};

/// The tag marking every annotation produced here as a downtime marker.
const DOWN_TAG: &str = "down";

/// Errors that abort a whole annotation request.
///
/// Per-check outage-fetch failures are not represented here; they are
/// absorbed inside the engine and only shrink the response.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The filter pattern did not compile as a regular expression.
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Listing the monitored checks failed; nothing else can proceed.
    #[error("failed to list checks: {0}")]
    Provider(#[from] ProviderError),
}

/// Translates provider outage history into dashboard annotations.
#[derive(Debug)]
pub struct AnnotationEngine<P> {
    provider: P,
}

impl<P: CheckProvider> AnnotationEngine<P> {
    /// Create an engine over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Produce the annotation sequence for one request.
    ///
    /// `query` filters checks by hostname; an empty query matches every
    /// check. An invalid pattern fails the request before any provider call
    /// is issued. Annotations come back grouped by check in filtered order,
    /// each check's intervals in the order the provider reported them.
    pub async fn annotations(
        &self,
        query: &str,
        window: QueryWindow,
    ) -> Result<Vec<Annotation>, AnnotateError> {
        let pattern = if query.is_empty() { ".*" } else { query };
        let matcher = Regex::new(pattern)?;

        let checks = self.provider.list_checks(true).await?;

        let selected: Vec<Check> = checks
            .into_iter()
            .filter(|check| matcher.is_match(&check.hostname))
            .collect();

        // One fetch per check. join_all keeps results in input order, so a
        // slow or failing check never reorders the response.
        let summaries = future::join_all(
            selected
                .iter()
                .map(|check| self.provider.outage_summary(check.id, window)),
        )
        .await;

        let mut annotations = Vec::new();
        for (check, summary) in selected.iter().zip(summaries) {
            let summary = match summary {
                Ok(summary) => summary,
                Err(err) => {
                    warn!(check = %check.id, error = %err, "outage summary fetch failed, skipping check");
                    continue;
                }
            };

            let tags = compose_tags(check);
            for state in &summary.states {
                if !state.status.is_down() {
                    continue;
                }
                annotations.push(Annotation {
                    time: state.from,
                    time_end: state.to,
                    title: check.name.clone(),
                    text: check.hostname.clone(),
                    tags: tags.clone(),
                });
            }
        }

        Ok(annotations)
    }
}

/// Build the tag set shared by every annotation of one check: the "down"
/// marker, the hostname, and the check's own tags, sorted ascending.
/// Duplicates in the source data are preserved.
fn compose_tags(check: &Check) -> Vec<String> {
    let mut tags = Vec::with_capacity(check.tags.len() + 2);
    tags.push(DOWN_TAG.to_string());
    tags.push(check.hostname.clone());
    tags.extend(check.tags.iter().cloned());
    tags.sort();
    tags
}
