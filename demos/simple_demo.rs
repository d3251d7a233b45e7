//! Simple index & search demo.
//!
//! Reads a text file line by line, indexes each line as a document with
//! a TEXT field `text` and a KEYWORD field `line` (both stored), then
//! runs three term queries and prints the hits.
//!
//! Run with: `cargo run --example simple_demo [path/to/text.txt]`

use std::sync::Arc;

use tilia::{Document, IndexBuilder, QueryParser, Searcher};

const SAMPLE: &str = include_str!("data/alice.txt");

fn main() -> tilia::Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let lines: Vec<&str> = text.lines().collect();
    println!("Lines : {}", lines.len());

    // 1. Indexing: one document per line, sealed into a segment
    let mut builder = IndexBuilder::new();
    for (i, line) in lines.iter().enumerate() {
        builder.add_document(
            Document::builder()
                .add_text("text", *line)
                .add_keyword("line", i.to_string())
                .build(),
        )?;
    }
    let segment = Arc::new(builder.seal()?);

    // 2. Searching: three single-term queries over the `text` field
    let searcher = Searcher::new(segment);
    let parser = QueryParser::new("text");

    for query_str in ["pretty", "beautiful", "she"] {
        let query = parser.parse(query_str)?;
        let results = searcher.search(&query, 10)?;

        println!("Query : {query_str} / TOTAL HITS : {}", results.total_hits);
        for hit in &results.hits {
            let doc = hit.document.as_ref();
            let line = doc.and_then(|d| d.get("line")).unwrap_or("-");
            let text = doc.and_then(|d| d.get("text")).unwrap_or("-");
            println!("Found Doc - line : {line} , text : {text}");
        }
    }

    Ok(())
}
