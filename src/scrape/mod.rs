//! Live scraping of the RERA project list table

pub mod locator;

pub use locator::{Locator, TABLE_LOCATORS};

use crate::browser::{BrowserSession, LaunchOptions};
use crate::error::{Result, ScrapeError};
use crate::parse::{ScrapedTable, parse_table};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Listing page of registered projects
pub const PROJECT_LIST_URL: &str = "https://rera.odisha.gov.in/projects/project-list";

/// Where the page markup is dumped when no table could be found
pub const DEFAULT_DEBUG_PATH: &str = "debug_page.html";

/// Options for one scrape of the project list
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Page to load
    pub url: String,

    /// Browser launch configuration
    pub launch: LaunchOptions,

    /// Upper bound on waiting for `document.readyState` to become `complete`
    pub settle_timeout: Duration,

    /// Total time allowed for finding the table across all locators
    pub table_timeout: Duration,

    /// Pause between polling rounds
    pub poll_interval: Duration,

    /// File receiving the page markup when the table is not found
    pub debug_path: PathBuf,

    /// Locators in priority order
    pub locators: Vec<Locator>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: PROJECT_LIST_URL.to_string(),
            launch: LaunchOptions::default(),
            settle_timeout: Duration::from_secs(5),
            table_timeout: Duration::from_secs(45),
            poll_interval: Duration::from_millis(500),
            debug_path: PathBuf::from(DEFAULT_DEBUG_PATH),
            locators: TABLE_LOCATORS.to_vec(),
        }
    }
}

impl ScrapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn launch(mut self, launch: LaunchOptions) -> Self {
        self.launch = launch;
        self
    }

    pub fn settle_timeout(mut self, timeout: Duration) -> Self {
        self.settle_timeout = timeout;
        self
    }

    pub fn table_timeout(mut self, timeout: Duration) -> Self {
        self.table_timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn debug_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_path = path.into();
        self
    }
}

/// Scrape the project list table, logging any failure and returning `None` instead.
pub fn scrape_project_list(options: &ScrapeOptions) -> Option<ScrapedTable> {
    match try_scrape(options) {
        Ok(table) => Some(table),
        Err(ScrapeError::Table(reason)) => {
            log::warn!("{}", reason);
            None
        }
        Err(e) => {
            log::error!("An error occurred: {}", e);
            log::debug!("Detailed error information: {:?}", e);
            None
        }
    }
}

/// Scrape the project list table.
///
/// The browser session lives only for the duration of this call and is released on
/// every return path.
pub fn try_scrape(options: &ScrapeOptions) -> Result<ScrapedTable> {
    log::info!("Launching browser...");
    let session = BrowserSession::launch(options.launch.clone())?;

    log::info!("Loading {}", options.url);
    session.navigate(&options.url)?;

    if !session.wait_until_ready(options.settle_timeout, options.poll_interval)? {
        log::warn!(
            "Page still loading after {}s, polling for the table anyway",
            options.settle_timeout.as_secs()
        );
    }

    log::info!("Waiting for table to load...");
    let table_html = match wait_for_table(&session, options)? {
        Some(html) => html,
        None => {
            save_debug_page(&session, options);
            return Err(ScrapeError::TableNotFound { waited_secs: options.table_timeout.as_secs() });
        }
    };

    log::info!("Table found, extracting data...");
    let table = parse_table(&table_html)?;
    log::info!("Extracted {} rows across {} columns", table.len(), table.columns.len());

    Ok(table)
}

/// Poll the locators until one matches or the budget runs out, returning the table's outer HTML
fn wait_for_table(session: &BrowserSession, options: &ScrapeOptions) -> Result<Option<String>> {
    let tab = session.tab();
    let start = Instant::now();

    loop {
        if let Some((locator, element)) = locator::find_first(tab, &options.locators) {
            log::info!("Found table with {}", locator);
            let html = element
                .get_content()
                .map_err(|e| ScrapeError::EvaluationFailed(format!("Failed to read table markup: {}", e)))?;
            return Ok(Some(html));
        }

        if start.elapsed() >= options.table_timeout {
            return Ok(None);
        }
        std::thread::sleep(options.poll_interval);
    }
}

fn save_debug_page(session: &BrowserSession, options: &ScrapeOptions) {
    let written = session
        .page_source()
        .and_then(|html| std::fs::write(&options.debug_path, html).map_err(ScrapeError::from));

    match written {
        Ok(()) => log::info!("Saved page source to {}", options.debug_path.display()),
        Err(e) => log::error!("Failed to save page source to {}: {}", options.debug_path.display(), e),
    }
}
