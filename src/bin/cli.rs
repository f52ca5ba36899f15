//! Command line entry point for the RERA scraper
//!
//! Runs the static card parser by default; `scrape` drives a browser against the live site.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rera_scrape::{LaunchOptions, ScrapeOptions, extract_projects_from_file, output, scrape_project_list};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "rera-scrape")]
#[command(about = "Scrape Odisha RERA project listings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse project cards from a saved listing page
    Cards {
        /// Saved HTML page
        #[arg(default_value = "debug_page.html")]
        file: PathBuf,

        /// Maximum number of cards to print
        #[arg(short = 'n', long, default_value_t = 6)]
        count: usize,
    },

    /// Load the live project list and save its table as CSV
    Scrape {
        /// Listing page URL
        #[arg(long, default_value = rera_scrape::PROJECT_LIST_URL)]
        url: String,

        /// CSV output file
        #[arg(short, long, default_value = "rera_odisha_projects.csv")]
        out: PathBuf,

        /// Show the browser window
        #[arg(long)]
        headed: bool,

        /// Browser binary to use instead of the default lookup
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Where to dump the page when no table is found
        #[arg(long, default_value = rera_scrape::scrape::DEFAULT_DEBUG_PATH)]
        debug_path: PathBuf,

        /// Seconds to wait for the table
        #[arg(long, default_value_t = 45)]
        table_timeout: u64,

        /// Seconds to wait for the page to finish loading
        #[arg(long, default_value_t = 5)]
        settle_timeout: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Cards { file: PathBuf::from("debug_page.html"), count: 6 });

    match command {
        Command::Cards { file, count } => {
            let cards = extract_projects_from_file(&file, count)
                .with_context(|| format!("Failed to read cards from {}", file.display()))?;
            output::print_cards(&cards, &file.display().to_string(), count, stdout().lock())?;
        }
        Command::Scrape { url, out, headed, chrome_path, debug_path, table_timeout, settle_timeout } => {
            let mut launch = LaunchOptions::new().headless(!headed);
            if let Some(path) = chrome_path {
                launch = launch.chrome_path(path);
            }

            let options = ScrapeOptions::new()
                .url(url)
                .launch(launch)
                .debug_path(debug_path)
                .table_timeout(Duration::from_secs(table_timeout))
                .settle_timeout(Duration::from_secs(settle_timeout));

            let Some(table) = scrape_project_list(&options) else {
                bail!("Scrape failed; see the log above");
            };

            println!("Successfully scraped project list:");
            output::print_preview(&table, 5, stdout().lock())?;

            output::write_csv(&table, &out)?;
            log::info!("Data saved to '{}'", out.display());
            log::info!("Total projects scraped: {}", table.len());
        }
    }

    Ok(())
}
