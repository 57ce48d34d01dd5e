//! Reads documents and stop-words from disk and feeds them to the search core.

use anyhow::{Context, Result};
use search_core::{IndexConfig, SearchIndex, StopWords};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Read every file under `dir` with the given extension, following symlinks.
/// Identifiers are paths relative to `dir` using `/` separators, sorted so
/// that document ids are stable across runs. Entries the walk cannot read are
/// logged and skipped.
pub fn load_corpus<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<(String, String)>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        anyhow::bail!("corpus directory not found: {}", dir.display());
    }
    let mut docs = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable corpus entry");
                continue;
            }
        };
        let p = entry.path();
        if !p.is_file() || p.extension().and_then(|s| s.to_str()) != Some(extension) {
            continue;
        }
        let rel = p.strip_prefix(dir).unwrap_or(p);
        let id = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let bytes = fs::read(p).with_context(|| format!("reading {}", p.display()))?;
        docs.push((id, String::from_utf8_lossy(&bytes).into_owned()));
    }
    docs.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!(dir = %dir.display(), docs = docs.len(), "loaded corpus");
    Ok(docs)
}

/// `.json` files hold an array of strings, anything else one word per line.
/// Without a path the built-in English list is used.
pub fn load_stopwords(path: Option<&Path>) -> Result<StopWords> {
    let Some(path) = path else { return Ok(StopWords::english()) };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading stop-words {}", path.display()))?;
    let stop_words = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        StopWords::from_json_str(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        StopWords::from_lines(&text)
    };
    tracing::debug!(words = stop_words.len(), "loaded stop-words");
    Ok(stop_words)
}

pub fn build_index<P: AsRef<Path>>(
    corpus: P,
    extension: &str,
    stop_words: StopWords,
    config: IndexConfig,
) -> Result<SearchIndex> {
    let docs = load_corpus(corpus, extension)?;
    let index = SearchIndex::build(docs, stop_words, config)?;
    Ok(index)
}
