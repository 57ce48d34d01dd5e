use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("document identifier must not be empty")]
    EmptyDocumentId,

    #[error("invalid stop-word list: {0}")]
    StopWords(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
