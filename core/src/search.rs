use crate::corpus::{Corpus, DocId};
use crate::index::InvertedIndex;
use crate::media::Media;
use std::cmp::Ordering;

/// A matched document with the average rating it had when the query ran.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub doc_id: DocId,
    pub average_rating: f64,
}

impl Hit {
    pub fn new(doc_id: DocId, media: &dyn Media) -> Self {
        Self { doc_id, average_rating: media.average_rating() }
    }
}

/// Higher average rating first; equal averages fall back to corpus order.
impl Ord for Hit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .average_rating
            .total_cmp(&self.average_rating)
            .then_with(|| self.doc_id.cmp(&other.doc_id))
    }
}

impl PartialOrd for Hit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hit {}

/// Look `query` up as a single case-folded token and rank the matching documents.
///
/// The query is not split: `"white whale"` only matches a document containing that exact
/// token, which whitespace tokenization never produces. Unknown terms yield no hits.
pub fn search(index: &InvertedIndex, corpus: &Corpus, query: &str) -> Vec<Hit> {
    let Some(docs) = index.postings(query) else {
        tracing::debug!(query, hits = 0, "no such term");
        return Vec::new();
    };
    // Sort on a snapshot of averages; live ratings may be appended concurrently.
    let mut hits: Vec<Hit> = docs
        .iter()
        .filter_map(|&doc_id| corpus.get(doc_id).map(|media| Hit::new(doc_id, media)))
        .collect();
    hits.sort();
    tracing::debug!(query, hits = hits.len(), "search");
    hits
}

/// Same as [`search`], resolved to the documents themselves.
pub fn search_media<'a>(index: &InvertedIndex, corpus: &'a Corpus, query: &str) -> Vec<&'a dyn Media> {
    search(index, corpus, query)
        .into_iter()
        .filter_map(|hit| corpus.get(hit.doc_id))
        .collect()
}
