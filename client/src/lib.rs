use serde::Serialize;
use shelf_core::{search, Corpus, InvertedIndex};
use std::io::{self, Write};
use std::time::Instant;

pub mod session;

pub use session::{RatingPolicy, Session};

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub doc_id: u32,
    pub title: String,
    pub contributors: Vec<String>,
    pub average_rating: f64,
    pub num_ratings: usize,
}

pub fn search_response(index: &InvertedIndex, corpus: &Corpus, query: &str) -> SearchResponse {
    let start = Instant::now();
    let results: Vec<SearchHit> = search(index, corpus, query)
        .into_iter()
        .filter_map(|hit| {
            let media = corpus.get(hit.doc_id)?;
            Some(SearchHit {
                doc_id: hit.doc_id,
                title: media.title().to_string(),
                contributors: media.contributors().to_vec(),
                average_rating: hit.average_rating,
                num_ratings: media.rating_count(),
            })
        })
        .collect();
    SearchResponse {
        query: query.to_string(),
        took_s: start.elapsed().as_secs_f64(),
        total_hits: results.len(),
        results,
    }
}

/// Print one `term<TAB>doc count` line per index key, sorted, optionally filtered by prefix.
pub fn write_terms<W: Write>(out: &mut W, index: &InvertedIndex, prefix: Option<&str>) -> io::Result<()> {
    for (term, docs) in index.terms_with_prefix(prefix.unwrap_or("")) {
        writeln!(out, "{term}\t{}", docs.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Book;

    fn fixture() -> (Corpus, InvertedIndex) {
        let mut corpus = Corpus::new();
        corpus.push(Book::from_text("Moby Dick", vec!["Herman Melville".into()], "call me Ishmael whale")).unwrap();
        corpus.push(Book::from_text("Dune", vec!["Frank Herbert".into()], "Call me Paul")).unwrap();
        let index = InvertedIndex::build(&corpus);
        (corpus, index)
    }

    #[test]
    fn json_response_lists_ranked_hits() {
        let (corpus, index) = fixture();
        corpus.get(1).unwrap().add_rating(4).unwrap();
        let json = serde_json::to_value(search_response(&index, &corpus, "CALL")).unwrap();
        assert_eq!(json["query"], "CALL");
        assert_eq!(json["total_hits"], 2);
        assert_eq!(json["results"][0]["title"], "Dune");
        assert_eq!(json["results"][0]["average_rating"], 4.0);
        assert_eq!(json["results"][0]["num_ratings"], 1);
        assert_eq!(json["results"][1]["doc_id"], 0);
        assert_eq!(json["results"][1]["contributors"][0], "Herman Melville");
    }

    #[test]
    fn terms_are_sorted_with_counts() {
        let (_, index) = fixture();
        let mut out = Vec::new();
        write_terms(&mut out, &index, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "call\t2\nishmael\t1\nme\t2\npaul\t1\nwhale\t1\n");

        let mut out = Vec::new();
        write_terms(&mut out, &index, Some("Wh")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "whale\t1\n");
    }
}
