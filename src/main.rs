//! Command-line entry point.
//!
//! Reads a page manifest, translates it and writes the resulting page as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use page_translator::Translator;
use page_translator::config::ConfigManager;
use page_translator::locale::SystemLocale;
use page_translator::page::{
    MemoryPage,
    PageManifest,
};
use page_translator::resource::{
    FileFetcher,
    HttpFetcher,
    ResourceFetcher,
};
use page_translator::storage::FileStorage;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "page-translator", version, about = "Translate marked page elements")]
struct Cli {
    /// Page manifest (JSON) to translate
    page: PathBuf,

    /// Language to load after the persisted one
    #[arg(short, long)]
    language: Option<String>,

    /// Configuration file (defaults to .page-translator.json in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory resources are read from
    #[arg(long, default_value = ".", conflicts_with = "base_url")]
    root: PathBuf,

    /// Fetch resources over HTTP relative to this URL
    #[arg(long)]
    base_url: Option<String>,

    /// Storage file for the persisted language
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Write the translated page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Sets up logging and picks the resource fetcher.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.base_url.as_deref() {
        Some(base_url) => {
            let fetcher = HttpFetcher::new(base_url)?;
            run(&cli, fetcher).await
        }
        None => run(&cli, FileFetcher::new(&cli.root)).await,
    }
}

/// Translates the page manifest and writes the snapshot.
async fn run<F: ResourceFetcher>(cli: &Cli, fetcher: F) -> Result<()> {
    let mut config_manager = ConfigManager::new();
    match &cli.config {
        Some(path) => config_manager.load_file(path)?,
        None => config_manager.load_settings(Some(std::env::current_dir()?.as_path()))?,
    }

    let manifest_text = std::fs::read_to_string(&cli.page)
        .with_context(|| format!("Failed to read page manifest {}", cli.page.display()))?;
    let manifest: PageManifest = serde_json::from_str(&manifest_text)
        .with_context(|| format!("Failed to parse page manifest {}", cli.page.display()))?;
    let page = MemoryPage::from_manifest(manifest);

    let storage_path = cli
        .storage
        .clone()
        .or_else(FileStorage::default_location)
        .context("No storage location available; pass --storage")?;

    let translator = Translator::new(
        config_manager.into_settings(),
        page.clone(),
        fetcher,
        FileStorage::new(storage_path),
        SystemLocale,
    )
    .await?;

    if let Some(stored) = translator.stored_language() {
        translator.load(&stored).await;
    }
    if let Some(language) = cli.language.as_deref().filter(|lang| !lang.is_empty()) {
        translator.load(language).await;
    }

    let output = serde_json::to_string_pretty(&page.snapshot())?;
    match &cli.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
