use rera_scrape::{ProjectCard, ScrapeError, extract_projects_from_file, parse_cards};
use std::io::Write;

const LISTING_PAGE: &str = r#"
<html>
<head><title>Project List | RERA Odisha</title></head>
<body>
  <div class="row">
    <div class="col-md-4">
      <div class="card project-card">
        <div class="card-body">
          <h5 class="card-title">Skyline Residency</h5>
          <div class="details">
            <label class="label-control">Address</label>
            <strong>Bhubaneswar, Odisha</strong>
          </div>
        </div>
      </div>
    </div>
    <div class="col-md-4">
      <div class="card project-card">
        <div class="card-body">
          <h5 class="card-title">Kalinga Heights</h5>
          <small>Kalinga Developers</small>
          <p><span class="fw-bold me-2">RP/19/2022/00871</span></p>
          <div><label class="label-control">Project Type :</label><strong>Residential</strong></div>
          <div><label class="label-control">Started From :</label><strong>12 Mar, 2022</strong></div>
          <div><label class="label-control">Possession by :</label><strong>30 Jun, 2025</strong></div>
        </div>
      </div>
    </div>
  </div>
</body>
</html>
"#;

#[test]
fn test_card_with_only_title_and_address() {
    let cards = parse_cards(LISTING_PAGE, 6);

    assert_eq!(
        cards[0],
        ProjectCard {
            project_name: "Skyline Residency".to_string(),
            address: "Bhubaneswar, Odisha".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_second_card_fields() {
    let cards = parse_cards(LISTING_PAGE, 6);
    let card = &cards[1];

    assert_eq!(card.project_name, "Kalinga Heights");
    assert_eq!(card.promoter_name, "Kalinga Developers");
    assert_eq!(card.rera_regd_no, "RP/19/2022/00871");
    assert_eq!(card.project_type, "Residential");
    assert_eq!(card.started_from, "12 Mar, 2022");
    assert_eq!(card.possession_by, "30 Jun, 2025");
    assert_eq!(card.address, "");
}

#[test]
fn test_fewer_cards_than_requested() {
    assert_eq!(parse_cards(LISTING_PAGE, 6).len(), 2);
    assert_eq!(parse_cards(LISTING_PAGE, 1).len(), 1);
    assert!(parse_cards(LISTING_PAGE, 0).is_empty());
}

#[test]
fn test_page_without_cards() {
    let cards = parse_cards("<html><body><p>No projects found</p></body></html>", 6);

    assert!(cards.is_empty());
}

#[test]
fn test_missing_fields_serialize_as_empty_strings() {
    let cards = parse_cards(LISTING_PAGE, 1);
    let json = serde_json::to_value(&cards[0]).unwrap();

    assert_eq!(json["Project Name"], "Skyline Residency");
    assert_eq!(json["Promoter Name"], "");
    assert_eq!(json["Rera Regd. No"], "");
    assert_eq!(json["Possession by"], "");
}

#[test]
fn test_extract_from_saved_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LISTING_PAGE.as_bytes()).unwrap();

    let cards = extract_projects_from_file(file.path(), 6).unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].rera_regd_no, "RP/19/2022/00871");
}

#[test]
fn test_missing_file_is_an_error() {
    let result = extract_projects_from_file("/nonexistent/debug_page.html", 6);

    assert!(matches!(result, Err(ScrapeError::Io(_))));
}
