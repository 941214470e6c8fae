mod decode;
mod entry;
mod output;
mod parser;
mod pipeline;
mod scrape;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use parser::layout::PAGE_COUNT;

#[derive(Parser)]
#[command(name = "hamugo_scraper", about = "Scrape the hamugo vocabulary pages into JSON")]
struct Cli {
    /// Output file for the aggregated entries
    #[arg(short, long, default_value = "hamugo.json")]
    out: PathBuf,

    /// Scrape a single page (1-9) and print its entries instead of
    /// writing the file
    #[arg(short, long)]
    page: Option<u8>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    if let Some(page) = cli.page {
        if !(1..=PAGE_COUNT).contains(&page) {
            anyhow::bail!("page must be between 1 and {PAGE_COUNT}");
        }
        let results = scrape::scrape_pages(page..=page).await?;
        let entries = pipeline::collate(results);
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Scraping {} pages...", PAGE_COUNT);
    let results = scrape::scrape_pages(1..=PAGE_COUNT).await?;
    let entries = pipeline::collate(results);

    output::write_json(&cli.out, &entries)?;
    output::print_summary(&entries);
    println!("Wrote {} entries to {}", entries.len(), cli.out.display());

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
