use crate::config::IndexConfig;
use crate::error::{Result, SearchError};
use crate::idf;
use crate::index::{Dictionary, DocId, DocMeta, PostingsEntry, SearchIndex};
use crate::stopwords::StopWords;
use crate::tokenizer::tokenize;
use rayon::prelude::*;
use std::collections::HashMap;

/// Accumulates documents into the dictionary. [`finish`](Self::finish)
/// computes IDF weights and yields the queryable [`SearchIndex`].
pub struct IndexBuilder {
    stop_words: StopWords,
    config: IndexConfig,
    dictionary: Dictionary,
    docs: Vec<DocMeta>,
    doc_ids: HashMap<String, DocId>,
}

impl IndexBuilder {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_config(stop_words, IndexConfig::default())
    }

    pub fn with_config(stop_words: StopWords, config: IndexConfig) -> Self {
        Self {
            stop_words,
            config,
            dictionary: HashMap::new(),
            docs: Vec::new(),
            doc_ids: HashMap::new(),
        }
    }

    /// Tokenize `text` and index it under `id`.
    pub fn add_document(&mut self, id: &str, text: &str) -> Result<DocId> {
        let tokens = tokenize(text, &self.stop_words);
        self.ingest(id, tokens)
    }

    /// Index an already tokenized document. Each distinct term gets a single
    /// posting for this document carrying its occurrence count. Ingesting an
    /// id again reuses its `DocId`, replacing the recorded length and the
    /// counts of the terms seen this time.
    pub fn ingest(&mut self, id: &str, tokens: Vec<(String, usize)>) -> Result<DocId> {
        let doc_id = self.register(id, tokens.len())?;
        for (term, tf) in term_frequencies(tokens) {
            self.dictionary
                .entry(term)
                .or_insert_with_key(|term| PostingsEntry::new(term.clone()))
                .postings
                .insert(doc_id, tf);
        }
        Ok(doc_id)
    }

    /// Index (identifier, text) pairs in order. With `parallel` set the
    /// documents are tokenized on the rayon pool first; dictionary insertion
    /// stays sequential so ids follow input order.
    pub fn add_documents<I, S, T>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        if !self.config.parallel {
            for (id, text) in docs {
                self.add_document(id.as_ref(), text.as_ref())?;
            }
            return Ok(());
        }

        let docs: Vec<(S, T)> = docs.into_iter().collect();
        let stop_words = &self.stop_words;
        let tokenized: Vec<Vec<(String, usize)>> = docs
            .par_iter()
            .map(|(_, text)| tokenize(text.as_ref(), stop_words))
            .collect();
        tracing::debug!(docs = docs.len(), "tokenized documents in parallel");
        for ((id, _), tokens) in docs.iter().zip(tokenized) {
            self.ingest(id.as_ref(), tokens)?;
        }
        Ok(())
    }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    /// Compute IDF weights over everything ingested so far.
    pub fn finish(self) -> SearchIndex {
        let Self { stop_words, config, mut dictionary, docs, doc_ids } = self;
        idf::finalize(&mut dictionary, docs.len(), config.idf);
        tracing::info!(
            num_docs = docs.len(),
            num_terms = dictionary.len(),
            idf = ?config.idf,
            "index finalized"
        );
        SearchIndex { dictionary, docs, doc_ids, stop_words, config }
    }

    fn register(&mut self, id: &str, length: usize) -> Result<DocId> {
        if id.is_empty() {
            return Err(SearchError::EmptyDocumentId);
        }
        if let Some(&doc_id) = self.doc_ids.get(id) {
            tracing::debug!(id, "re-ingesting document");
            self.docs[doc_id as usize].length = length;
            return Ok(doc_id);
        }
        let doc_id = self.docs.len() as DocId;
        self.doc_ids.insert(id.to_string(), doc_id);
        self.docs.push(DocMeta { name: id.to_string(), length });
        Ok(doc_id)
    }
}

fn term_frequencies(tokens: Vec<(String, usize)>) -> HashMap<String, u32> {
    let mut tf: HashMap<String, u32> = HashMap::new();
    for (term, _pos) in tokens {
        *tf.entry(term).or_insert(0) += 1;
    }
    tf
}
