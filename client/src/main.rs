use anyhow::{ensure, Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shelf_client::{search_response, write_terms, RatingPolicy, Session};
use shelf_core::{load_books, search_media, seed_corpus, InvertedIndex, SeedConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_BOOKS_DIR: &str = "./books";

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Search and rate a directory of books", long_about = None)]
struct Cli {
    /// Directory of book files (`Title:` line, `Author:` line, then the text)
    #[arg(long, global = true, env = "SHELF_BOOKS_DIR", default_value = DEFAULT_BOOKS_DIR)]
    books: PathBuf,
    /// Start with no ratings instead of random demo ratings
    #[arg(
        long,
        global = true,
        env = "SHELF_NO_SEED",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    no_seed: bool,
    /// Seed for the demo ratings generator
    #[arg(long, global = true, env = "SHELF_SEED")]
    seed: Option<u64>,
    /// Lowest score the Rate command accepts
    #[arg(long, global = true, default_value_t = RatingPolicy::default().min)]
    min_rating: i64,
    /// Highest score the Rate command accepts
    #[arg(long, global = true, default_value_t = RatingPolicy::default().max)]
    max_rating: i64,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive Search/Rate/Quit loop (the default)
    Repl,
    /// Run a single query and print the ranked results
    Search {
        query: String,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List index terms in sorted order with their document counts
    Terms {
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    ensure!(
        0 <= cli.min_rating && cli.min_rating <= cli.max_rating,
        "rating range {}..={} must be non-negative and non-empty",
        cli.min_rating,
        cli.max_rating
    );

    let corpus = load_books(&cli.books)
        .with_context(|| format!("failed to load books from {}", cli.books.display()))?;
    if !cli.no_seed {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        seed_corpus(&corpus, &mut rng, &SeedConfig::default())?;
    }
    let index = InvertedIndex::build(&corpus);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let policy = RatingPolicy { min: cli.min_rating, max: cli.max_rating };
            Session::new(&corpus, &index, io::stdin().lock(), out).with_policy(policy).run()?;
        }
        Commands::Search { query, json } => {
            if json {
                serde_json::to_writer_pretty(&mut out, &search_response(&index, &corpus, &query))?;
                writeln!(out)?;
            } else {
                let results = search_media(&index, &corpus, &query);
                if results.is_empty() {
                    writeln!(out, "No results!")?;
                }
                for media in results {
                    writeln!(out, "{media}")?;
                }
            }
        }
        Commands::Terms { prefix } => write_terms(&mut out, &index, prefix.as_deref())?,
    }
    Ok(())
}
