use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use indexer::{build_index, load_stopwords, DEFAULT_EXTENSION};
use search_core::{IdfWeighting, IndexConfig, SearchIndex};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Build an in-memory TF-IDF index over a directory of text files and query it", long_about = None)]
struct Cli {
    #[command(flatten)]
    index: IndexArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Directory holding the documents
    #[arg(long, global = true, default_value = "./corpus")]
    corpus: PathBuf,
    /// Stop-word list (JSON array or one word per line); built-in English list if omitted
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,
    /// Extension of the files to index
    #[arg(long, global = true, default_value = DEFAULT_EXTENSION)]
    ext: String,
    /// IDF weighting
    #[arg(long, global = true, default_value_t = IdfWeighting::Ratio)]
    idf: IdfWeighting,
    /// Tokenize documents in parallel
    #[arg(long, global = true, default_value_t = false)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and print the ranked hits as JSON
    Query {
        text: String,
        /// Print at most this many hits
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print index statistics as JSON
    Stats,
    /// Read one query per line from stdin
    Repl {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let index = open(&cli.index)?;

    match cli.command {
        Commands::Query { text, limit } => {
            let hits = match limit {
                Some(k) => index.search_top(&text, k),
                None => index.search(&text),
            };
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Stats => println!("{}", serde_json::to_string_pretty(&index.stats())?),
        Commands::Repl { limit } => repl(&index, limit)?,
    }
    Ok(())
}

fn open(args: &IndexArgs) -> Result<SearchIndex> {
    let stop_words = load_stopwords(args.stopwords.as_deref())?;
    let config = IndexConfig { idf: args.idf, parallel: args.parallel };
    let start = std::time::Instant::now();
    let index = build_index(&args.corpus, &args.ext, stop_words, config)?;
    let took_s = start.elapsed().as_secs_f64();
    tracing::info!(num_docs = index.num_docs(), took_s, "index ready");
    Ok(index)
}

fn repl(index: &SearchIndex, limit: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let hits = index.search(&line);
        let total_hits = hits.len();
        for hit in hits.iter().take(limit) {
            match hit.score() {
                Some(score) => writeln!(out, "{score:>14.4}  {}", hit.filename())?,
                None => writeln!(out, "{:>14}  {}", "-", hit.filename())?,
            }
        }
        writeln!(out, "-- {total_hits} hits")?;
        out.flush()?;
    }
    Ok(())
}
