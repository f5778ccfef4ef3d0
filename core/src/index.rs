use crate::corpus::{Corpus, DocId};
use crate::media::Media;
use crate::tokenizer::normalize;
use std::collections::{BTreeMap, BTreeSet};

/// Lowercased token -> ids of every document containing it at least once.
///
/// Built once from a corpus and read-only afterwards. Keys iterate in lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: BTreeMap<String, BTreeSet<DocId>>,
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(corpus: &Corpus) -> Self {
        let mut index = Self::new();
        for (doc_id, media) in corpus.iter() {
            index.add_document(doc_id, media);
        }
        tracing::info!(num_docs = index.num_docs, num_terms = index.num_terms(), "built inverted index");
        index
    }

    fn add_document(&mut self, doc_id: DocId, media: &dyn Media) {
        for token in media.content() {
            self.postings.entry(normalize(token)).or_default().insert(doc_id);
        }
        self.num_docs += 1;
    }

    /// Documents containing `term`, matched case-insensitively.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocId>> {
        self.postings.get(normalize(term).as_str())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.postings(term).is_some()
    }

    /// Index keys in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    /// Sorted entries whose key starts with the lowercased `prefix`.
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a BTreeSet<DocId>)> + 'a {
        let prefix = normalize(prefix);
        self.postings
            .range(prefix.clone()..)
            .take_while(move |(term, _)| term.starts_with(&prefix))
            .map(|(term, docs)| (term.as_str(), docs))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<DocId>)> + '_ {
        self.postings.iter().map(|(term, docs)| (term.as_str(), docs))
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }
}
