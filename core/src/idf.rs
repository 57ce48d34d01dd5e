use crate::config::IdfWeighting;
use crate::index::Dictionary;

/// Assign every entry its IDF weight. `num_docs` is the number of documents
/// actually indexed.
pub fn finalize(dictionary: &mut Dictionary, num_docs: usize, weighting: IdfWeighting) {
    for entry in dictionary.values_mut() {
        entry.idf = weighting.weight(num_docs, entry.document_frequency());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PostingsEntry;

    fn entry(term: &str, docs: &[u32]) -> (String, PostingsEntry) {
        let mut e = PostingsEntry::new(term.to_string());
        for &d in docs {
            e.postings.insert(d, 1);
        }
        (term.to_string(), e)
    }

    #[test]
    fn ratio_of_total_to_document_frequency() {
        let mut dict: Dictionary =
            [entry("common", &[0, 1, 2, 3]), entry("rare", &[2])].into_iter().collect();
        finalize(&mut dict, 4, IdfWeighting::Ratio);
        assert_eq!(dict["common"].idf, 1.0);
        assert_eq!(dict["rare"].idf, 4.0);
    }

    #[test]
    fn log_weighting_zeroes_ubiquitous_terms() {
        let mut dict: Dictionary =
            [entry("common", &[0, 1]), entry("rare", &[1])].into_iter().collect();
        finalize(&mut dict, 2, IdfWeighting::Log);
        assert_eq!(dict["common"].idf, 0.0);
        assert!((dict["rare"].idf - 2f64.ln()).abs() < 1e-12);
    }
}
