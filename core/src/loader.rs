use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::media::{Book, Media};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const TITLE_HEADER: &str = "Title:";
pub const AUTHOR_HEADER: &str = "Author:";

/// Parse a book file: a `Title:` line, an `Author:` line, then the body.
pub fn parse_book(text: &str) -> Result<Book> {
    let mut lines = text.splitn(3, '\n');
    let title = header_value(lines.next(), TITLE_HEADER)?;
    let author = header_value(lines.next(), AUTHOR_HEADER)?;
    let body = lines.next().unwrap_or("");
    Ok(Book::from_text(title, vec![author.to_string()], body))
}

fn header_value<'a>(line: Option<&'a str>, header: &'static str) -> Result<&'a str> {
    line.map(|l| l.trim_end_matches('\r'))
        .and_then(|l| l.strip_prefix(header))
        .map(str::trim)
        .ok_or(Error::MissingHeader(header))
}

pub fn load_book(path: &Path) -> Result<Book> {
    let text = fs::read_to_string(path)?;
    parse_book(&text)
}

/// Load every book file directly inside `dir`, in file name order.
///
/// Files that cannot be read or lack the header lines are logged and skipped.
pub fn load_books<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let mut corpus = Corpus::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match load_book(path) {
            Ok(book) => {
                tracing::debug!(path = %path.display(), words = book.content().len(), "loaded book");
                corpus.push(book)?;
            }
            Err(err) => tracing::warn!(path = %path.display(), error = %err, "skipping book file"),
        }
    }
    tracing::info!(num_docs = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}
