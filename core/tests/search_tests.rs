use search_core::{IdfWeighting, IndexConfig, SearchHit, SearchIndex, StopWords};

fn corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Salzburg.txt", "Salzburg is a city in Austria. Salzburg hosts the Salzburg festival."),
        ("Mozart.txt", "Mozart was born in Salzburg, Austria."),
        ("Austria.txt", "Austria borders Germany. Austria is alpine."),
        ("Germany.txt", "Germany and Austria share a language."),
        ("RNA.txt", "RNA carries a blueprint."),
        ("_03_Bonnie_Clyde.txt", "A blueprint for robbery."),
    ]
}

fn index() -> SearchIndex {
    SearchIndex::build(corpus(), StopWords::english(), IndexConfig::default()).unwrap()
}

fn filenames(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(SearchHit::filename).collect()
}

fn scored(hit: &SearchHit) -> &search_core::ScoredDocument {
    match hit {
        SearchHit::Scored(doc) => doc,
        SearchHit::Unscored { filename } => panic!("unscored hit {filename}"),
    }
}

#[test]
fn single_term_score_is_idf_times_tf() {
    let index = index();
    let hits = index.search("salzburg");
    assert_eq!(hits.len(), 2);
    // N = 6, df = 2, tf(Salzburg.txt) = 3 ("salzburg." and "salzburg" both normalize)
    let top = scored(&hits[0]);
    assert_eq!(top.filename, "Salzburg.txt");
    assert_eq!(top.score, 3.0 * 3.0);
    assert_eq!(top.terms.get("salzburg"), Some(&9.0));
    assert_eq!(scored(&hits[1]).score, 3.0);
}

#[test]
fn multi_term_scores_accumulate_per_term() {
    let index = index();
    let hits = index.search("austria germany");
    let austria_doc = hits.iter().map(scored).find(|d| d.filename == "Austria.txt").unwrap();
    // austria: df 4 -> idf 1.5, tf 2; germany: df 2 -> idf 3, tf 1
    assert_eq!(austria_doc.terms["austria"], 3.0);
    assert_eq!(austria_doc.terms["germany"], 3.0);
    assert_eq!(austria_doc.score, 6.0);
    assert_eq!(filenames(&hits)[..2], ["Austria.txt", "Germany.txt"]);
}

#[test]
fn equal_scores_break_ties_by_filename() {
    let hits = index().search("blueprint");
    assert_eq!(filenames(&hits), vec!["RNA.txt", "_03_Bonnie_Clyde.txt"]);
    assert_eq!(hits[0].score(), hits[1].score());
}

#[test]
fn query_term_order_is_irrelevant() {
    let index = index();
    assert_eq!(index.search("austria germany"), index.search("germany austria"));
    assert_eq!(index.search("mozart, salzburg. austria"), index.search("austria salzburg mozart"));
}

#[test]
fn repeated_searches_are_deterministic() {
    let index = index();
    let first = index.search("austria salzburg blueprint");
    for _ in 0..5 {
        assert_eq!(index.search("austria salzburg blueprint"), first);
    }
}

#[test]
fn unknown_terms_do_not_change_results() {
    let index = index();
    let expected = index.search("salzburg");
    assert_eq!(index.search("salzburg blubbergurken"), expected);
    assert_eq!(index.search("blubbergurken salzburg"), expected);
}

#[test]
fn unknown_only_query_returns_nothing() {
    assert!(index().search("blubbergurken").is_empty());
}

#[test]
fn empty_query_returns_every_document_unscored() {
    let index = index();
    for query in ["", "   ", "the and of", ".,"] {
        let hits = index.search(query);
        assert_eq!(hits.len(), index.num_docs());
        assert!(hits.iter().all(|h| matches!(h, SearchHit::Unscored { .. })));
        assert_eq!(filenames(&hits), corpus().iter().map(|(name, _)| *name).collect::<Vec<_>>());
    }
}

#[test]
fn logarithmic_idf_is_optional() {
    let cfg = IndexConfig { idf: IdfWeighting::Log, ..IndexConfig::default() };
    let index = SearchIndex::build(corpus(), StopWords::english(), cfg).unwrap();
    let hits = index.search("blueprint");
    assert!((hits[0].score().unwrap() - 3f64.ln()).abs() < 1e-12);
}

#[test]
fn plural_stripped_stopword_forms_are_searchable() {
    let index = index();
    // "was" strips to "wa", which the English list does not contain
    let hits = index.search("was");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filename(), "Mozart.txt");
    assert_eq!(hits[0].score(), Some(6.0));
}

#[test]
fn duplicate_ids_keep_the_document_count() {
    let docs = [("a.txt", "river river"), ("b.txt", "mountain"), ("a.txt", "river")];
    let index = SearchIndex::build(docs, StopWords::english(), IndexConfig::default()).unwrap();
    assert_eq!(index.num_docs(), 2);
    assert_eq!(index.search("river")[0].score(), Some(2.0));
}
