//! End-to-end indexing and search scenarios.

use std::sync::Arc;

use tilia::{
    DocId, Document, IndexBuilder, IndexSegment, QueryParser, Result, Searcher, TiliaError,
};

fn seal_text_docs(lines: &[&str]) -> Result<Arc<IndexSegment>> {
    let mut builder = IndexBuilder::new();
    for line in lines {
        builder.add_document(Document::builder().add_text("text", *line).build())?;
    }
    Ok(Arc::new(builder.seal()?))
}

fn hit_ids(results: &tilia::SearchResults) -> Vec<DocId> {
    results.hits.iter().map(|h| h.doc_id).collect()
}

#[test]
fn test_cat_dog_scenario() -> Result<()> {
    // Three documents: "the cat sat", "the dog sat", "cats and dogs"
    let segment = seal_text_docs(&["the cat sat", "the dog sat", "cats and dogs"])?;
    let searcher = Searcher::new(segment);
    let parser = QueryParser::new("text");

    // "text:cat" matches exactly doc 0 ("cats" is a different term)
    let results = searcher.search(&parser.parse("text:cat")?, 10)?;
    assert_eq!(hit_ids(&results), vec![0]);
    assert!(results.hits[0].score > 0.0);

    // "text:the" matches docs 0 and 1, ordered by score then id
    let results = searcher.search(&parser.parse("text:the")?, 10)?;
    assert_eq!(hit_ids(&results), vec![0, 1]);

    // "text:zebra" matches nothing, and is not an error
    let results = searcher.search(&parser.parse("text:zebra")?, 10)?;
    assert!(results.hits.is_empty());
    assert_eq!(results.total_hits, 0);

    Ok(())
}

#[test]
fn test_keyword_field_skips_normalization() -> Result<()> {
    let mut builder = IndexBuilder::new();
    builder.add_document(
        Document::builder()
            .add_text("text", "some body text")
            .add_keyword("id", "ABC-1")
            .build(),
    )?;
    let searcher = Searcher::new(Arc::new(builder.seal()?));
    let parser = QueryParser::new("text");

    // Exact case matches
    let results = searcher.search(&parser.parse("id:ABC-1")?, 10)?;
    assert_eq!(hit_ids(&results), vec![0]);

    // Different case does not
    let results = searcher.search(&parser.parse("id:abc-1")?, 10)?;
    assert!(results.hits.is_empty());

    Ok(())
}

#[test]
fn test_postings_completeness() -> Result<()> {
    // "shared" is in exactly docs 1, 3, 4 and nowhere else
    let segment = seal_text_docs(&[
        "alpha beta",
        "shared gamma",
        "delta epsilon",
        "zeta shared",
        "shared shared eta",
    ])?;
    let searcher = Searcher::new(segment);
    let query = QueryParser::new("text").parse("shared")?;

    let results = searcher.search(&query, 100)?;
    let mut ids = hit_ids(&results);
    ids.sort();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(searcher.count(&query)?, 3);

    Ok(())
}

#[test]
fn test_search_is_deterministic() -> Result<()> {
    let segment = seal_text_docs(&[
        "the quick brown fox",
        "the lazy dog",
        "the quick dog",
        "a quick brown dog",
    ])?;
    let searcher = Searcher::new(segment);
    let query = QueryParser::new("text").parse("quick dog the")?;

    let first = searcher.search(&query, 10)?;
    let second = searcher.search(&query, 10)?;
    assert_eq!(first, second);

    // Byte-identical once rendered
    let first_json = serde_json::to_string(&hit_ids(&first))?;
    let second_json = serde_json::to_string(&hit_ids(&second))?;
    assert_eq!(first_json, second_json);

    Ok(())
}

#[test]
fn test_score_monotonicity() -> Result<()> {
    // Same corpus, except doc 0 gains more occurrences of the query
    // term; its score must not decrease.
    let baseline = Searcher::new(seal_text_docs(&["cat", "dog", "bird"])?);
    let boosted = Searcher::new(seal_text_docs(&["cat cat cat", "dog", "bird"])?);
    let query = QueryParser::new("text").parse("cat")?;

    let baseline_score = baseline.search(&query, 10)?.hits[0].score;
    let boosted_score = boosted.search(&query, 10)?.hits[0].score;
    assert!(boosted_score >= baseline_score);

    Ok(())
}

#[test]
fn test_tie_break_is_lower_doc_id_first() -> Result<()> {
    // Identical documents score identically; order falls back to id.
    let segment = seal_text_docs(&["same words", "same words", "same words"])?;
    let searcher = Searcher::new(segment);
    let query = QueryParser::new("text").parse("same")?;

    let results = searcher.search(&query, 10)?;
    assert_eq!(hit_ids(&results), vec![0, 1, 2]);

    Ok(())
}

#[test]
fn test_builder_lifecycle_errors() -> Result<()> {
    let mut builder = IndexBuilder::new();
    builder.add_document(Document::builder().add_text("text", "hello").build())?;
    let _segment = builder.seal()?;

    // OPEN -> SEALED is one-way and terminal
    assert!(matches!(
        builder.add_document(Document::builder().add_text("text", "again").build()),
        Err(TiliaError::BuilderSealed)
    ));
    assert!(matches!(builder.seal(), Err(TiliaError::BuilderSealed)));

    Ok(())
}

#[test]
fn test_empty_segment_searches_cleanly() -> Result<()> {
    let mut builder = IndexBuilder::new();
    let searcher = Searcher::new(Arc::new(builder.seal()?));
    let query = QueryParser::new("text").parse("anything")?;

    let results = searcher.search(&query, 10)?;
    assert!(results.hits.is_empty());
    assert_eq!(searcher.count(&query)?, 0);

    Ok(())
}

#[test]
fn test_concurrent_readers_over_one_segment() -> Result<()> {
    let segment = seal_text_docs(&["the cat sat", "the dog sat", "cats and dogs"])?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segment = segment.clone();
            std::thread::spawn(move || {
                let searcher = Searcher::new(segment);
                let query = QueryParser::new("text").parse("the").unwrap();
                let results = searcher.search(&query, 10).unwrap();
                results.hits.iter().map(|h| h.doc_id).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![0, 1]);
    }

    Ok(())
}
