//! In-memory inverted index with TF-IDF ranking.
//!
//! Documents are tokenized and fed to an [`IndexBuilder`]; calling
//! [`IndexBuilder::finish`] computes the IDF weights and hands back an
//! immutable [`SearchIndex`] that answers queries.
//!
//! ```
//! use search_core::{IndexBuilder, SearchHit, StopWords};
//!
//! let mut builder = IndexBuilder::new(StopWords::english());
//! builder.add_document("a.txt", "Rust systems programming").unwrap();
//! builder.add_document("b.txt", "Learning rust").unwrap();
//! let index = builder.finish();
//!
//! let hits = index.search("programming");
//! assert!(matches!(&hits[0], SearchHit::Scored(doc) if doc.filename == "a.txt"));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod idf;
pub mod index;
pub mod ranker;
pub mod scorer;
pub mod stopwords;
pub mod tokenizer;

pub use builder::IndexBuilder;
pub use config::{IdfWeighting, IndexConfig};
pub use error::{Result, SearchError};
pub use index::{DocId, DocMeta, Dictionary, IndexStats, PostingsEntry, SearchIndex};
pub use ranker::{compare_scored, rank, SearchHit};
pub use scorer::{score, ScoredDocument};
pub use stopwords::StopWords;
pub use tokenizer::{tokenize, tokenize_query};
