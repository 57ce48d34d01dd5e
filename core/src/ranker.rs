use crate::index::DocId;
use crate::scorer::ScoredDocument;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One search result. Serializes either as `{filename, score, terms}` or,
/// for queries without terms, as a bare `{filename}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchHit {
    Scored(ScoredDocument),
    Unscored { filename: String },
}

impl SearchHit {
    pub fn filename(&self) -> &str {
        match self {
            SearchHit::Scored(doc) => &doc.filename,
            SearchHit::Unscored { filename } => filename,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            SearchHit::Scored(doc) => Some(doc.score),
            SearchHit::Unscored { .. } => None,
        }
    }
}

/// Score descending, then filename ascending.
pub fn compare_scored(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.filename.cmp(&b.filename))
}

pub fn rank(scored: HashMap<DocId, ScoredDocument>) -> Vec<ScoredDocument> {
    let mut ranked: Vec<ScoredDocument> = scored.into_values().collect();
    ranked.sort_by(compare_scored);
    ranked
}
