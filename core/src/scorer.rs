use crate::index::{DocId, SearchIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A document matching a query, with the per-term breakdown of its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub filename: String,
    pub score: f64,
    pub terms: BTreeMap<String, f64>,
}

/// Score every document containing at least one query term.
///
/// Each distinct term contributes `idf * tf` to a document; repeated query
/// terms count once and unknown terms are skipped. The total is summed over
/// the breakdown in term order so it does not depend on query word order.
pub fn score<S: AsRef<str>>(
    query_terms: &[S],
    index: &SearchIndex,
) -> HashMap<DocId, ScoredDocument> {
    let mut seen = HashSet::new();
    let mut scored: HashMap<DocId, ScoredDocument> = HashMap::new();
    for term in query_terms.iter().map(AsRef::as_ref) {
        if !seen.insert(term) {
            continue;
        }
        let Some(entry) = index.entry(term) else { continue };
        for (&doc_id, &tf) in &entry.postings {
            let contribution = entry.idf * tf as f64;
            scored
                .entry(doc_id)
                .or_insert_with(|| ScoredDocument {
                    filename: index.docs[doc_id as usize].name.clone(),
                    score: 0.0,
                    terms: BTreeMap::new(),
                })
                .terms
                .insert(term.to_string(), contribution);
        }
    }
    for doc in scored.values_mut() {
        doc.score = doc.terms.values().sum();
    }
    scored
}
