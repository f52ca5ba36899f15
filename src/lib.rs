//! # rera-scrape
//!
//! Scrapes the project list of the Odisha Real Estate Regulatory Authority (RERA) with a
//! headless Chrome, and parses project cards out of saved listing pages.
//!
//! ## Features
//!
//! - **Live Table Scraper**: launches a stealth-configured browser, waits for the results
//!   table through a priority list of locators, and returns it as aligned rows
//! - **Static Card Parser**: reads a saved page and extracts each project card's fields by
//!   finding a label and reading the bold value that follows it
//! - **CSV Export**: writes scraped tables with a UTF-8 byte-order mark
//!
//! ## Library Usage
//!
//! ### Scraping the live table
//!
//! ```rust,no_run
//! use rera_scrape::{ScrapeOptions, output::write_csv, scrape_project_list};
//!
//! # fn main() -> rera_scrape::Result<()> {
//! // Failures are logged and come back as `None`
//! if let Some(table) = scrape_project_list(&ScrapeOptions::default()) {
//!     println!("Scraped {} projects", table.len());
//!     write_csv(&table, "rera_odisha_projects.csv")?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Parsing a saved page
//!
//! ```rust,no_run
//! # fn main() -> rera_scrape::Result<()> {
//! let cards = rera_scrape::extract_projects_from_file("debug_page.html", 6)?;
//! for card in &cards {
//!     println!("{} ({})", card.project_name, card.rera_regd_no);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`scrape`]: The live scrape flow and its table locators
//! - [`parse`]: Pure HTML parsing for tables and project cards
//! - [`output`]: CSV and console output
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod error;
pub mod output;
pub mod parse;
pub mod scrape;

pub use browser::{BrowserSession, LaunchOptions};
pub use error::{Result, ScrapeError, TableError};
pub use parse::{ProjectCard, ScrapedTable, TableRow, extract_projects_from_file, parse_cards, parse_table};
pub use scrape::{Locator, PROJECT_LIST_URL, ScrapeOptions, scrape_project_list, try_scrape};
