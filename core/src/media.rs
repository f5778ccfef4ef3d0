//! Searchable media items and their rating aggregates.
//!
//! Every kind of media exposes the same capability set through [`Media`]; the index
//! and query engine never look at a concrete type. [`Book`] is the only kind so far.

use crate::error::{Error, Result};
use crate::tokenizer::tokenize;
use parking_lot::RwLock;
use std::fmt;

/// A single stored score.
pub type Rating = u32;

/// Append-only sequence of scores with derived count and mean.
///
/// The sequence sits behind its own lock so ratings can be appended through a shared
/// reference while the corpus and index are shared read-only.
#[derive(Debug, Default)]
pub struct Ratings {
    scores: RwLock<Vec<Rating>>,
}

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score. Scores outside `0..=Rating::MAX` are rejected and leave the sequence untouched.
    pub fn add(&self, score: i64) -> Result<()> {
        let score = Rating::try_from(score).map_err(|_| Error::InvalidRating(score))?;
        self.scores.write().push(score);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.scores.read().len()
    }

    /// Arithmetic mean of all scores, or 0 when there are none. Recomputed on every call.
    pub fn average(&self) -> f64 {
        self.snapshot().1
    }

    /// Count and mean taken under one read lock.
    pub fn snapshot(&self) -> (usize, f64) {
        let scores = self.scores.read();
        if scores.is_empty() {
            return (0, 0.0);
        }
        let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
        (scores.len(), sum as f64 / scores.len() as f64)
    }
}

/// Capability set shared by every kind of searchable media.
///
/// `Display` renders the description shown to users; see [`write_description`].
pub trait Media: fmt::Display + Send + Sync {
    fn title(&self) -> &str;

    /// Authors, artists, editors: whoever is credited.
    fn contributors(&self) -> &[String];

    /// Whitespace-delimited tokens in original case.
    fn content(&self) -> &[String];

    fn ratings(&self) -> &Ratings;

    fn add_rating(&self, score: i64) -> Result<()> {
        self.ratings().add(score)
    }

    fn rating_count(&self) -> usize {
        self.ratings().count()
    }

    fn average_rating(&self) -> f64 {
        self.ratings().average()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Render `"<title> by [<contributors>]"`, followed by `": <avg> (<n> ratings)"` once rated.
///
/// The average is rounded half-up to two decimals and always shows a fractional digit.
pub fn write_description(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    contributors: &[String],
    ratings: &Ratings,
) -> fmt::Result {
    write!(f, "{} by [{}]", title, contributors.join(", "))?;
    let (count, average) = ratings.snapshot();
    if count > 0 {
        write!(f, ": {:?} ({} ratings)", round_half_up(average), count)?;
    }
    Ok(())
}

fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[derive(Debug)]
pub struct Book {
    title: String,
    authors: Vec<String>,
    words: Vec<String>,
    ratings: Ratings,
}

impl Book {
    /// Build a book from any token producer. Tokens are stored as given.
    pub fn new<I, S>(title: impl Into<String>, authors: Vec<String>, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            authors,
            words: content.into_iter().map(Into::into).collect(),
            ratings: Ratings::new(),
        }
    }

    /// Build a book whose content is `text` split on whitespace.
    pub fn from_text(title: impl Into<String>, authors: Vec<String>, text: &str) -> Self {
        Self::new(title, authors, tokenize(text))
    }
}

impl Media for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn contributors(&self) -> &[String] {
        &self.authors
    }

    fn content(&self) -> &[String] {
        &self.words
    }

    fn ratings(&self) -> &Ratings {
        &self.ratings
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_description(f, &self.title, &self.authors, &self.ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moby() -> Book {
        Book::from_text("Moby Dick", vec!["Herman Melville".into()], "Call me Ishmael")
    }

    #[test]
    fn unrated_book_has_zero_average() {
        let book = moby();
        assert_eq!(book.rating_count(), 0);
        assert_eq!(book.average_rating(), 0.0);
        assert_eq!(book.describe(), "Moby Dick by [Herman Melville]");
    }

    #[test]
    fn ratings_update_count_and_average() {
        let book = moby();
        book.add_rating(3).unwrap();
        book.add_rating(5).unwrap();
        assert_eq!(book.rating_count(), 2);
        assert_eq!(book.average_rating(), 4.0);
        assert_eq!(book.describe(), "Moby Dick by [Herman Melville]: 4.0 (2 ratings)");
    }

    #[test]
    fn average_rounds_half_up_to_two_places() {
        let book = moby();
        for r in [4, 4, 5] {
            book.add_rating(r).unwrap();
        }
        assert_eq!(book.to_string(), "Moby Dick by [Herman Melville]: 4.33 (3 ratings)");

        let book = moby();
        for r in [1, 2, 2, 2, 2, 2, 2, 2] {
            book.add_rating(r).unwrap();
        }
        // 15 / 8 = 1.875
        assert!(book.to_string().ends_with(": 1.88 (8 ratings)"));
    }

    #[test]
    fn negative_rating_is_rejected() {
        let book = moby();
        book.add_rating(2).unwrap();
        let err = book.add_rating(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidRating(-1)));
        assert_eq!(book.rating_count(), 1);
        assert_eq!(book.average_rating(), 2.0);
    }

    #[test]
    fn oversized_rating_is_rejected() {
        let book = moby();
        let too_big = i64::from(Rating::MAX) + 1;
        let err = book.add_rating(too_big).unwrap_err();
        assert!(matches!(err, Error::InvalidRating(r) if r == too_big));
        assert_eq!(err.to_string(), "invalid rating 4294967296: ratings must be between 0 and 4294967295");
        assert_eq!(book.rating_count(), 0);

        book.add_rating(i64::from(Rating::MAX)).unwrap();
        assert_eq!(book.rating_count(), 1);
    }

    #[test]
    fn zero_is_a_valid_rating() {
        let book = moby();
        book.add_rating(0).unwrap();
        assert_eq!(book.rating_count(), 1);
        assert!(book.describe().ends_with(": 0.0 (1 ratings)"));
    }

    #[test]
    fn multiple_contributors_are_listed() {
        let book = Book::new("Good Omens", vec!["Terry Pratchett".into(), "Neil Gaiman".into()], Vec::<String>::new());
        assert_eq!(book.describe(), "Good Omens by [Terry Pratchett, Neil Gaiman]");
        assert!(book.content().is_empty());
    }
}
