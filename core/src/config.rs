//! Index build settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the per-term IDF weight is derived from `N` (indexed documents) and
/// `df` (documents containing the term).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdfWeighting {
    /// `N / df`
    #[default]
    Ratio,
    /// `ln(N / df)`
    Log,
    /// `ln(1 + N / df)`
    SmoothedLog,
}

impl IdfWeighting {
    pub fn weight(self, num_docs: usize, doc_freq: usize) -> f64 {
        let ratio = num_docs as f64 / doc_freq.max(1) as f64;
        match self {
            IdfWeighting::Ratio => ratio,
            IdfWeighting::Log => ratio.ln(),
            IdfWeighting::SmoothedLog => (1.0 + ratio).ln(),
        }
    }
}

impl fmt::Display for IdfWeighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdfWeighting::Ratio => "ratio",
            IdfWeighting::Log => "log",
            IdfWeighting::SmoothedLog => "smoothed-log",
        })
    }
}

impl FromStr for IdfWeighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratio" => Ok(IdfWeighting::Ratio),
            "log" => Ok(IdfWeighting::Log),
            "smoothed-log" => Ok(IdfWeighting::SmoothedLog),
            other => Err(format!(
                "unknown idf weighting '{other}' (expected ratio, log or smoothed-log)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub idf: IdfWeighting,
    /// Tokenize documents on the rayon pool during bulk ingestion.
    pub parallel: bool,
}
