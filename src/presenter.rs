use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::api::{ResearchResult, Source};

// Leading dash markers as emitted by the summarizer ("- point"). Stacked
// markers are consumed in one pass so that cleaning twice changes nothing.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:-\s*)+").expect("list marker pattern"));

/// Render-ready projection of a research result.
///
/// Same shape as the raw payload with every bullet pre-cleaned. Recomputed
/// whenever the stored result changes; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedView {
    pub query: String,
    /// Count of raw search hits. Independent of `sources.len()`: hits are
    /// what the search found, sources are what the backend analyzed.
    pub hits_found: usize,
    pub sources: Vec<NormalizedSource>,
    pub report: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSource {
    pub title: String,
    pub url: String,
    pub summary: Vec<String>,
}

/// Project a raw result into its display form: bullets cleaned, source and
/// bullet order untouched, query and report passed through verbatim.
pub fn normalize(result: &ResearchResult) -> NormalizedView {
    NormalizedView {
        query: result.query.clone(),
        hits_found: result.search_results.len(),
        sources: result.sources.iter().map(normalize_source).collect(),
        report: result.report.clone(),
    }
}

fn normalize_source(source: &Source) -> NormalizedSource {
    NormalizedSource {
        title: source.title.clone(),
        url: source.url.clone(),
        summary: source
            .summary
            .iter()
            .map(|bullet| strip_list_marker(bullet))
            .collect(),
    }
}

/// Remove the leading dash marker from a summary bullet. Bullets without a
/// marker pass through unchanged; the result never starts with a marker, so
/// stripping a second time is a no-op.
pub fn strip_list_marker(bullet: &str) -> String {
    LIST_MARKER.replace(bullet, "").into_owned()
}
