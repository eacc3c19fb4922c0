use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use storefront_lib::{
    build_service,
    modules::catalog::{BrowseCatalogHandler, BrowseCatalogQuery, SortScheme},
    shared::{application::Query, utils::init_logger, StorefrontConfig},
};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse the iTunes top albums chart", long_about = None)]
#[command(version)]
struct Cli {
    /// Read the feed from a JSON document instead of the network
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Only show albums whose name, artist or genre contains this text
    #[arg(short, long, default_value = "")]
    search: String,

    /// Sort order: rank-asc, rank-desc, price-asc or price-desc
    #[arg(long, default_value = "rank-asc", value_parser = parse_sort)]
    sort: SortScheme,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Number of albums to request from the feed
    #[arg(long)]
    limit: Option<u32>,

    /// Storefront country code
    #[arg(long)]
    country: Option<String>,
}

fn parse_sort(value: &str) -> std::result::Result<SortScheme, String> {
    value.parse().map_err(|e: storefront_lib::AppError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env().context("Failed to load configuration")?;
    if let Some(limit) = cli.limit {
        config = config.with_feed_limit(limit)?;
    }
    if let Some(country) = &cli.country {
        config = config.with_country(country);
    }

    let service = std::sync::Arc::new(build_service(&config, cli.file.as_deref())?);

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    service
        .refresh_cancellable(token)
        .await
        .context("Failed to load the album feed")?;

    let handler = BrowseCatalogHandler::new(service);
    let result = handler
        .execute(BrowseCatalogQuery::new(&cli.search, cli.sort))
        .await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Top {} albums ({})", result.total_count, result.sort.label());
    if !result.search_term.is_empty() {
        println!(
            "{} matching \"{}\"",
            result.visible_count, result.search_term
        );
    }
    for item in &result.items {
        println!(
            "{:>4}. {} | {} | {}",
            item.rank + 1,
            item.name,
            item.byline(),
            item.price_label()
        );
    }

    Ok(())
}
