use crate::config::{IdfWeighting, IndexConfig};
use crate::error::Result;
use crate::ranker::{rank, SearchHit};
use crate::scorer::score;
use crate::stopwords::StopWords;
use crate::tokenizer::tokenize_query;
use crate::IndexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense document id, assigned in ingestion order.
pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMeta {
    /// External identifier, reported as `filename` in results.
    pub name: String,
    /// Number of terms produced by tokenizing the document.
    pub length: usize,
}

/// All postings for one term plus its IDF weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingsEntry {
    pub term: String,
    /// Zero until the index is finished.
    pub idf: f64,
    /// doc -> term frequency
    pub postings: HashMap<DocId, u32>,
}

impl PostingsEntry {
    pub(crate) fn new(term: String) -> Self {
        Self { term, idf: 0.0, postings: HashMap::new() }
    }

    /// Number of distinct documents containing the term.
    pub fn document_frequency(&self) -> usize { self.postings.len() }

    pub fn term_frequency(&self, doc_id: DocId) -> Option<u32> {
        self.postings.get(&doc_id).copied()
    }
}

pub type Dictionary = HashMap<String, PostingsEntry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub num_terms: usize,
    pub num_postings: usize,
    pub idf: IdfWeighting,
}

/// Finalized, read-only index. Obtained from [`IndexBuilder::finish`].
#[derive(Debug)]
pub struct SearchIndex {
    pub(crate) dictionary: Dictionary,
    pub(crate) docs: Vec<DocMeta>,
    pub(crate) doc_ids: HashMap<String, DocId>,
    pub(crate) stop_words: StopWords,
    pub(crate) config: IndexConfig,
}

impl SearchIndex {
    /// Index `docs` as (identifier, text) pairs and finish the index.
    pub fn build<I, S, T>(docs: I, stop_words: StopWords, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        let mut builder = IndexBuilder::with_config(stop_words, config);
        builder.add_documents(docs)?;
        Ok(builder.finish())
    }

    /// Rank every document matching `query`.
    ///
    /// A query with no terms left after tokenization returns every document,
    /// unscored, in ingestion order.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let terms: Vec<String> = tokenize_query(query, &self.stop_words)
            .into_iter()
            .map(|(term, _)| term)
            .collect();
        if terms.is_empty() {
            return self
                .docs
                .iter()
                .map(|doc| SearchHit::Unscored { filename: doc.name.clone() })
                .collect();
        }
        rank(score(&terms, self)).into_iter().map(SearchHit::Scored).collect()
    }

    /// Like [`search`](Self::search), keeping the first `k` hits.
    pub fn search_top(&self, query: &str, k: usize) -> Vec<SearchHit> {
        let mut hits = self.search(query);
        hits.truncate(k);
        hits
    }

    pub fn dictionary(&self) -> &Dictionary { &self.dictionary }

    pub fn entry(&self, term: &str) -> Option<&PostingsEntry> { self.dictionary.get(term) }

    pub fn documents(&self) -> &[DocMeta] { &self.docs }

    pub fn document(&self, doc_id: DocId) -> Option<&DocMeta> { self.docs.get(doc_id as usize) }

    pub fn document_by_name(&self, name: &str) -> Option<(DocId, &DocMeta)> {
        let doc_id = *self.doc_ids.get(name)?;
        Some((doc_id, &self.docs[doc_id as usize]))
    }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn num_terms(&self) -> usize { self.dictionary.len() }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn config(&self) -> &IndexConfig { &self.config }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_docs: self.num_docs(),
            num_terms: self.num_terms(),
            num_postings: self.dictionary.values().map(PostingsEntry::document_frequency).sum(),
            idf: self.config.idf,
        }
    }
}
