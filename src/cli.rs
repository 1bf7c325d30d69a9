use crate::application::Application;
use crate::config::SiteConfig;
use crate::constants;
use crate::dom::Document;
use crate::fetch::{DirectoryFetcher, Fetcher, HttpFetcher};
use crate::models::{Feed, ProductRecord};
use crate::prelude::*;
use crate::search_engine::ProductIndex;

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, version = constants::APP_VERSION)]
#[command(about = "Enhance storefront pages with product cards, search results and includes", long_about = None)]
pub struct Cli {
    /// Site configuration file (TOML)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Serve site paths from this directory [default: .]
    #[arg(long, global = true, conflicts_with = "origin", value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Fetch site paths from this HTTP(S) origin instead of the filesystem
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Base path prefix for derived site URLs
    #[arg(long, global = true, env = "SITE_BASE")]
    pub site_base: Option<String>,

    /// Explicit product feed path
    #[arg(long, global = true, env = "JSON_DATA_PATH")]
    pub json_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the page scripts against an HTML page and print the result
    Render {
        /// HTML page to enhance
        #[arg(value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        /// Location path the page is served at
        #[arg(long, default_value = "/")]
        route: String,

        /// Render home cards regardless of the route
        #[arg(long, env = "FORCE_LOAD_CARDS", value_parser = FalseyValueParser::new())]
        force_home: bool,

        /// Feed-shaped JSON used to pre-populate the search index
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        seed: Option<PathBuf>,

        /// Dispatch a search event after the page settles; repeatable
        #[arg(long = "search", value_name = "QUERY")]
        searches: Vec<String>,

        /// Write the page here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        out: Option<PathBuf>,
    },

    /// Query the product feed
    Search {
        #[arg(required = true, value_name = "QUERY")]
        queries: Vec<String>,

        /// Feed-shaped JSON used instead of fetching the feed
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        seed: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub matches: Vec<ProductRecord>,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(site_base) = cli.site_base {
        config.site_base = site_base;
    }
    if let Some(json_path) = cli.json_path {
        config.json_path = json_path;
    }

    let fetcher: Arc<dyn Fetcher> = match cli.origin {
        Some(origin) => Arc::new(HttpFetcher::new(origin)),
        None => Arc::new(DirectoryFetcher::new(cli.root.unwrap_or_else(|| PathBuf::from(".")))),
    };

    match cli.command {
        Commands::Render { page, route, force_home, seed, searches, out } => {
            config.force_home |= force_home;
            let seed = read_seed(seed.as_deref())?;
            let html = render_page(config, &page, &route, fetcher, seed, &searches)?;
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => std::io::stdout().write_all(html.as_bytes())?,
            }
        }
        Commands::Search { queries, seed, format } => {
            let seed = read_seed(seed.as_deref())?;
            let reports = search_feed(&config, fetcher.as_ref(), seed, &queries);
            write_reports(&reports, format, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Records from a feed-shaped JSON file, or none without a file.
pub fn read_seed(path: Option<&Path>) -> Result<Vec<ProductRecord>> {
    let Some(path) = path else { return Ok(Vec::new()) };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed {}", path.display()))?;
    let feed = Feed::parse(&text)
        .with_context(|| format!("Seed {} is not a product feed", path.display()))?;
    Ok(feed.records())
}

pub fn render_page(
    config: SiteConfig,
    page: &Path,
    route: &str,
    fetcher: Arc<dyn Fetcher>,
    seed: Vec<ProductRecord>,
    searches: &[String],
) -> Result<String> {
    let html = std::fs::read_to_string(page)
        .with_context(|| format!("Failed to read page {}", page.display()))?;

    let mut application = Application::new(config, Document::parse(&html), route, fetcher, seed)
        .context("Failed to start the page runtime")?;
    application.activate();
    application.run_until_idle();

    for query in searches {
        application.search(query);
        application.run_until_idle();
    }

    Ok(application.into_document().to_html())
}

/// Loads the feed unless seeded, then runs every query, keeping what the results
/// panel would show. A feed that fails to load yields empty reports.
pub fn search_feed(
    config: &SiteConfig,
    fetcher: &dyn Fetcher,
    seed: Vec<ProductRecord>,
    queries: &[String],
) -> Vec<QueryReport> {
    let index = ProductIndex::with_seed(seed);
    if index.is_empty() && index.request_load() {
        let path = config.feed_path();
        match index.load(fetcher, &path) {
            Ok(count) => log::debug!("loaded {count} product(s) from {path}"),
            Err(error) => log::warn!("product feed {path} failed to load: {error}"),
        }
    }

    queries
        .iter()
        .map(|query| {
            let results = index.query(query, config.search.max_candidates);
            QueryReport {
                query: query.clone(),
                matches: results.records.into_iter().take(config.search.max_shown).collect(),
            }
        })
        .collect()
}

pub fn write_reports(reports: &[QueryReport], format: OutputFormat, output: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, reports)?;
            writeln!(output)?;
        }
        OutputFormat::Text => {
            for report in reports {
                writeln!(output, "{}: {} match(es)", report.query, report.matches.len())?;
                for record in &report.matches {
                    if record.author.is_empty() {
                        writeln!(output, "  {} <{}>", record.title, record.href())?;
                    } else {
                        writeln!(output, "  {} by {} <{}>", record.title, record.author, record.href())?;
                    }
                }
            }
        }
    }
    Ok(())
}
