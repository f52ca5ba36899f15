use rera_scrape::{LaunchOptions, ScrapeError, ScrapeOptions, TableError, scrape_project_list, try_scrape};
use std::time::Duration;

fn options(html: &str) -> ScrapeOptions {
    ScrapeOptions::new()
        .url(format!("data:text/html,{}", html))
        .launch(LaunchOptions::new().headless(true))
        .table_timeout(Duration::from_secs(3))
        .poll_interval(Duration::from_millis(100))
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_scrape_rendered_table() {
    let html = concat!(
        "<html><body><table class='table'>",
        "<thead><tr><th>Sl No.</th><th>Project Name</th><th>Promoter</th></tr></thead>",
        "<tbody><tr><td>1</td><td>Skyline Residency</td></tr></tbody>",
        "</table></body></html>"
    );

    let table = scrape_project_list(&options(html)).expect("Expected a table");

    assert_eq!(table.columns, vec!["Sl No.", "Project Name"]);
    assert_eq!(table.rows, vec![vec!["1".to_string(), "Skyline Residency".to_string()]]);
}

#[test]
#[ignore]
fn test_missing_table_writes_debug_page() {
    let dir = tempfile::tempdir().unwrap();
    let debug_path = dir.path().join("debug_page.html");
    let opts = options("<html><body><p>Maintenance</p></body></html>").debug_path(&debug_path);

    let result = try_scrape(&opts);

    assert!(matches!(result, Err(ScrapeError::TableNotFound { .. })));
    let saved = std::fs::read_to_string(&debug_path).expect("Debug page not written");
    assert!(saved.contains("Maintenance"));
}

#[test]
#[ignore]
fn test_table_without_rows_is_none() {
    let html = "<html><body><table><thead><tr><th>A</th></tr></thead><tbody></tbody></table></body></html>";

    assert!(matches!(try_scrape(&options(html)), Err(ScrapeError::Table(TableError::NoRows))));
    assert!(scrape_project_list(&options(html)).is_none());
}
