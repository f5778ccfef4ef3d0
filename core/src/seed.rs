//! Random demo ratings for a freshly loaded corpus.

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::media::{Media, Rating};
use rand::Rng;

pub const MIN_RATING: Rating = 1;
pub const MAX_RATING: Rating = 5;
pub const MIN_NUM_RATINGS: usize = 1;
/// Exclusive upper bound on ratings per document.
pub const MAX_NUM_RATINGS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    pub min_rating: Rating,
    pub max_rating: Rating,
    pub min_num_ratings: usize,
    pub max_num_ratings: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            min_num_ratings: MIN_NUM_RATINGS,
            max_num_ratings: MAX_NUM_RATINGS,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_rating > self.max_rating {
            return Err(Error::InvalidSeedConfig(format!(
                "min_rating {} exceeds max_rating {}",
                self.min_rating, self.max_rating
            )));
        }
        if self.min_num_ratings >= self.max_num_ratings {
            return Err(Error::InvalidSeedConfig(format!(
                "min_num_ratings {} must be below max_num_ratings {}",
                self.min_num_ratings, self.max_num_ratings
            )));
        }
        Ok(())
    }
}

/// Append a random batch of ratings to `media` and return how many were added.
///
/// Each document draws its own band `[low, high]` inside the configured rating range,
/// then between `min_num_ratings` (inclusive) and `max_num_ratings` (exclusive) scores from it.
pub fn seed_ratings<R: Rng + ?Sized>(media: &dyn Media, rng: &mut R, cfg: &SeedConfig) -> Result<usize> {
    cfg.validate()?;
    let low = rng.random_range(cfg.min_rating..=cfg.max_rating);
    let high = rng.random_range(low..=cfg.max_rating);
    let n = rng.random_range(cfg.min_num_ratings..cfg.max_num_ratings);
    for _ in 0..n {
        media.add_rating(i64::from(rng.random_range(low..=high)))?;
    }
    Ok(n)
}

/// Seed every document in the corpus. Returns the total number of ratings added.
pub fn seed_corpus<R: Rng + ?Sized>(corpus: &Corpus, rng: &mut R, cfg: &SeedConfig) -> Result<usize> {
    let mut total = 0;
    for (_, media) in corpus.iter() {
        total += seed_ratings(media, rng, cfg)?;
    }
    tracing::info!(num_docs = corpus.len(), num_ratings = total, "seeded demo ratings");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Book;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_ratings_stay_in_range() {
        let book = Book::from_text("Emma", vec!["Austen".into()], "");
        let mut rng = StdRng::seed_from_u64(7);
        let n = seed_ratings(&book, &mut rng, &SeedConfig::default()).unwrap();
        assert!((MIN_NUM_RATINGS..MAX_NUM_RATINGS).contains(&n));
        assert_eq!(book.rating_count(), n);
        let avg = book.average_rating();
        assert!((MIN_RATING as f64..=MAX_RATING as f64).contains(&avg));
    }

    #[test]
    fn same_seed_same_ratings() {
        let (mut corpus, mut other) = (Corpus::new(), Corpus::new());
        for title in ["a", "b", "c"] {
            corpus.push(Book::from_text(title, vec![], "")).unwrap();
            other.push(Book::from_text(title, vec![], "")).unwrap();
        }
        let cfg = SeedConfig::default();
        let total = seed_corpus(&corpus, &mut StdRng::seed_from_u64(42), &cfg).unwrap();
        let total_other = seed_corpus(&other, &mut StdRng::seed_from_u64(42), &cfg).unwrap();
        assert_eq!(total, total_other);
        for ((_, a), (_, b)) in corpus.iter().zip(other.iter()) {
            assert_eq!(a.rating_count(), b.rating_count());
            assert_eq!(a.average_rating(), b.average_rating());
        }
    }

    #[test]
    fn fixed_band_produces_exact_average() {
        let book = Book::from_text("Dune", vec![], "");
        let cfg = SeedConfig { min_rating: 3, max_rating: 3, min_num_ratings: 2, max_num_ratings: 3 };
        let n = seed_ratings(&book, &mut StdRng::seed_from_u64(1), &cfg).unwrap();
        assert_eq!(n, 2);
        assert_eq!(book.average_rating(), 3.0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let book = Book::from_text("Dune", vec![], "");
        let cfg = SeedConfig { min_rating: 5, max_rating: 1, ..SeedConfig::default() };
        let err = seed_ratings(&book, &mut StdRng::seed_from_u64(1), &cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidSeedConfig(_)));
        assert_eq!(book.rating_count(), 0);

        let cfg = SeedConfig { min_num_ratings: 10, max_num_ratings: 10, ..SeedConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
