use anyhow::Result;
use axum::Router;
use clap::Parser;
use indexer::{load_stopwords, DEFAULT_EXTENSION};
use search_core::{IdfWeighting, IndexConfig};
use server::build_app;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

/// Serve TF-IDF search over a directory of text files.
#[derive(Parser)]
#[command(name = "search-server")]
struct Args {
    /// Directory holding the documents
    #[arg(long, default_value = "./corpus")]
    corpus: PathBuf,
    /// Stop-word list (JSON array or one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Extension of the files to index
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,
    /// IDF weighting: ratio, log or smoothed-log
    #[arg(long, default_value_t = IdfWeighting::Ratio)]
    idf: IdfWeighting,
    /// Tokenize documents in parallel while building
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl Args {
    fn index_config(&self) -> IndexConfig {
        IndexConfig { idf: self.idf, parallel: self.parallel }
    }

    fn addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let stop_words = load_stopwords(args.stopwords.as_deref())?;
    let app: Router = build_app(&args.corpus, &args.ext, stop_words, args.index_config())?;

    let addr = args.addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
