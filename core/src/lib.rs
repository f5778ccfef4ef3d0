//! In-memory full-text search over a fixed corpus of rated media.
//!
//! A [`Corpus`] owns the documents, [`InvertedIndex::build`] maps every case-folded token
//! to the documents containing it, and [`search`] looks a single term up and orders the
//! matches by their current average rating.

pub mod corpus;
pub mod error;
pub mod index;
pub mod loader;
pub mod media;
pub mod search;
pub mod seed;
pub mod tokenizer;

pub use corpus::{Corpus, DocId};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use loader::{load_book, load_books, parse_book};
pub use media::{Book, Media, Rating, Ratings};
pub use search::{search, search_media, Hit};
pub use seed::{seed_corpus, seed_ratings, SeedConfig};
