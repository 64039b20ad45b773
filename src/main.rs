use anyhow::{Context, Result};
use clap::Parser;
use feedline::config::Config;
use feedline::feed::{load_feed, FeedItem, RemoteFeedLoader};
use feedline::http::ReqwestHttpClient;
use feedline::util::validate_url;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Get the default config file path (~/.config/feedline/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("feedline")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "feedline", about = "Fetch and decode a remote image feed")]
struct Args {
    /// Feed URL (overrides `feed_url` from the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Config file (defaults to ~/.config/feedline/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print one JSON object per item instead of text
    #[arg(long)]
    json: bool,
}

/// Item as printed with `--json`, using the wire field names.
#[derive(Serialize)]
struct ItemOutput<'a> {
    id: &'a uuid::Uuid,
    description: Option<&'a str>,
    location: Option<&'a str>,
    image: &'a url::Url,
}

impl<'a> From<&'a FeedItem> for ItemOutput<'a> {
    fn from(item: &'a FeedItem) -> Self {
        Self {
            id: &item.id,
            description: item.description.as_deref(),
            location: item.location.as_deref(),
            image: &item.image_url,
        }
    }
}

fn print_item(item: &FeedItem, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&ItemOutput::from(item))
            .context("Failed to serialize feed item")?;
        println!("{}", line);
        return Ok(());
    }

    println!("{}  {}", item.id, item.image_url);
    if let Some(description) = &item.description {
        println!("    {}", description);
    }
    if let Some(location) = &item.location {
        println!("    @ {}", location);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let Some(raw_url) = args.url.or(config.feed_url.clone()) else {
        eprintln!("Error: No feed URL given.");
        eprintln!();
        eprintln!("Pass one on the command line:");
        eprintln!("  feedline --url https://example.com/feed");
        eprintln!();
        eprintln!("Or set `feed_url` in {}.", config_path.display());
        std::process::exit(2);
    };
    let url = validate_url(&raw_url).with_context(|| format!("Invalid feed URL '{}'", raw_url))?;

    let http = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .context("Failed to build HTTP client")?;
    let client = ReqwestHttpClient::new(http)
        .context("No tokio runtime available")?
        .with_max_response_bytes(config.max_response_bytes);

    let loader = RemoteFeedLoader::new(Arc::new(client), url);

    match load_feed(&loader).await {
        Some(Ok(items)) => {
            tracing::info!(count = items.len(), "Feed loaded");
            for item in &items {
                print_item(item, args.json)?;
            }
            Ok(())
        }
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        None => anyhow::bail!("Feed request ended without a result"),
    }
}
