//! Interactive Search/Rate/Quit loop over a loaded corpus.

use anyhow::Result;
use shelf_core::seed::{MAX_RATING, MIN_RATING};
use shelf_core::{search_media, Corpus, DocId, InvertedIndex};
use std::io::{self, BufRead, Write};

/// Scores the Rate command accepts, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingPolicy {
    pub min: i64,
    pub max: i64,
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self { min: i64::from(MIN_RATING), max: i64::from(MAX_RATING) }
    }
}

impl RatingPolicy {
    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

pub struct Session<'a, R, W> {
    corpus: &'a Corpus,
    index: &'a InvertedIndex,
    policy: RatingPolicy,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(corpus: &'a Corpus, index: &'a InvertedIndex, input: R, output: W) -> Self {
        Self { corpus, index, policy: RatingPolicy::default(), input, output }
    }

    pub fn with_policy(mut self, policy: RatingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the shelf search engine!")?;
        loop {
            writeln!(self.output, "What would you like to do? [Search, Rate, Quit]")?;
            let Some(command) = self.prompt()? else { break };
            match command.trim().to_lowercase().as_str() {
                "search" => self.search()?,
                "rate" => self.rate()?,
                "quit" => break,
                _ => writeln!(self.output, "Invalid command, please try again.")?,
            }
        }
        writeln!(self.output, "See you next time!")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `> `, read one line without its terminator. `None` at end of input.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "Enter query:")?;
        let Some(query) = self.prompt()? else { return Ok(()) };
        let results = search_media(self.index, self.corpus, &query);
        if results.is_empty() {
            writeln!(self.output, "\tNo results!")?;
        }
        for media in results {
            writeln!(self.output, "\t{media}")?;
        }
        Ok(())
    }

    fn rate(&mut self) -> Result<()> {
        let corpus = self.corpus;
        for (doc_id, media) in corpus.iter() {
            writeln!(self.output, "\t{doc_id}: {media}")?;
        }
        writeln!(self.output, "What would you like to rate (enter index)?")?;
        let Some(choice) = self.prompt()? else { return Ok(()) };
        let Some((doc_id, media)) = choice
            .trim()
            .parse::<DocId>()
            .ok()
            .and_then(|id| corpus.get(id).map(|m| (id, m)))
        else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(());
        };

        writeln!(self.output, "Rating [{}]", media.title())?;
        writeln!(self.output, "What rating would you give?")?;
        let Some(score) = self.prompt()? else { return Ok(()) };
        match score.trim().parse::<i64>() {
            Ok(score) if self.policy.contains(score) => match media.add_rating(score) {
                Ok(()) => tracing::info!(doc_id, score, "rating added"),
                Err(err) => writeln!(self.output, "Invalid rating: {err}")?,
            },
            _ => writeln!(
                self.output,
                "Invalid rating, expected a whole number from {} to {}",
                self.policy.min, self.policy.max
            )?,
        }
        Ok(())
    }
}
