use crate::stopwords::StopWords;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n|\r").expect("valid regex");
    static ref QUERY_SEPARATOR: Regex = Regex::new(r"[\s.,]+").expect("valid regex");
    static ref NON_TERM_CHAR: Regex = Regex::new(r"[^0-9a-z-]").expect("valid regex");
}

/// Tokenize document text into (term, position).
///
/// Lowercases, splits on whitespace, keeps ASCII letters, digits and internal
/// hyphens, strips one trailing plural `s` and drops stop-words. Hyphenated
/// words are emitted whole and their parts are appended after the word list.
/// The position is the index of the whitespace-delimited source word.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<(String, usize)> {
    let normalized = normalize(text);
    analyze(normalized.split_whitespace(), stop_words)
}

/// Same as [`tokenize`], additionally splitting on `.` and `,`.
pub fn tokenize_query(text: &str, stop_words: &StopWords) -> Vec<(String, usize)> {
    let normalized = normalize(text);
    analyze(QUERY_SEPARATOR.split(&normalized).filter(|w| !w.is_empty()), stop_words)
}

fn normalize(text: &str) -> String {
    LINE_BREAK.replace_all(&text.to_lowercase(), " ").into_owned()
}

fn analyze<'a>(
    words: impl Iterator<Item = &'a str>,
    stop_words: &StopWords,
) -> Vec<(String, usize)> {
    let mut terms = Vec::new();
    let mut compound_parts = Vec::new();
    for (pos, word) in words.enumerate() {
        let stripped = NON_TERM_CHAR.replace_all(word, "");
        let candidate = stripped.trim_matches('-');
        if candidate.contains('-') {
            compound_parts.extend(candidate.split('-').map(|part| (part.to_string(), pos)));
        }
        push_term(&mut terms, candidate, pos, stop_words);
    }
    for (part, pos) in compound_parts {
        push_term(&mut terms, &part, pos, stop_words);
    }
    terms
}

fn push_term(
    terms: &mut Vec<(String, usize)>,
    candidate: &str,
    pos: usize,
    stop_words: &StopWords,
) {
    let term = candidate.strip_suffix('s').unwrap_or(candidate);
    if term.is_empty() || stop_words.contains(term) { return; }
    terms.push((term.to_string(), pos));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: Vec<(String, usize)>) -> Vec<String> {
        tokens.into_iter().map(|(w, _)| w).collect()
    }

    #[test]
    fn basic_tokenize() {
        let t = words(tokenize("Running, runners RUN!", &StopWords::empty()));
        assert_eq!(t, vec!["running", "runner", "run"]);
    }

    #[test]
    fn hyphen_parts_follow_word_list() {
        let t = tokenize("state-of-the-art tools", &StopWords::english());
        assert_eq!(
            t,
            vec![
                ("state-of-the-art".to_string(), 0),
                ("tool".to_string(), 1),
                ("state".to_string(), 0),
                ("art".to_string(), 0),
            ]
        );
    }

    #[test]
    fn dangling_hyphens_are_trimmed() {
        let t = words(tokenize("- -- -pre post- a-", &StopWords::empty()));
        assert_eq!(t, vec!["pre", "post", "a"]);
    }

    #[test]
    fn query_splits_on_dots_and_commas() {
        let sw = StopWords::empty();
        assert_eq!(words(tokenize_query("austria,germany.prussia", &sw)), vec!["austria", "germany", "prussia"]);
        assert_eq!(words(tokenize("austria,germany", &sw)), vec!["austriagermany"]);
    }

    #[test]
    fn line_breaks_separate_words() {
        let t = words(tokenize("alpha\r\nbeta\ngamma", &StopWords::empty()));
        assert_eq!(t, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn plural_and_stopword_filtering() {
        let t = words(tokenize("This is the Salzburg festivals s", &StopWords::english()));
        // "is" becomes "i", itself a stop-word; "this" becomes "thi", which is not
        assert_eq!(t, vec!["thi", "salzburg", "festival"]);
    }

    #[test]
    fn stopwords_match_after_plural_strip() {
        let sw: StopWords = ["was", "this"].into_iter().collect();
        assert_eq!(words(tokenize("was this", &sw)), vec!["wa", "thi"]);
        let sw: StopWords = ["wa"].into_iter().collect();
        assert!(tokenize_query("Was", &sw).is_empty());
    }
}
