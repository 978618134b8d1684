//! Service-level read/write flows without the HTTP layer.

mod common;

use common::{template_deck, FakeSlides};
use slidefill::{ColumnRole, ContentRecord, Error, LocatorOptions, SlidesService};

fn records(count: usize) -> Vec<ContentRecord> {
    (1..=count)
        .map(|n| ContentRecord {
            number: n.to_string(),
            title: format!("Case {}", n),
            description: "Details".into(),
            department: "Sales".into(),
            impact: "Low".into(),
            data_sources: "CRM".into(),
        })
        .collect()
}

#[tokio::test]
async fn test_read_locates_grid() {
    let fake = FakeSlides::new().with_document("tmpl", template_deck());
    let service = SlidesService::new(fake);

    let outcome = service.read("tmpl").await.unwrap();
    assert_eq!(outcome.total_slides, 6);
    assert_eq!(outcome.empty_cells.slide_indices(), vec![3, 4]);
    assert_eq!(
        outcome.empty_cells.cell(3, 2, ColumnRole::Department),
        Some("s3r2-dept")
    );
}

#[tokio::test]
async fn test_custom_template_slides() {
    let fake = FakeSlides::new().with_document("tmpl", template_deck());
    let service = SlidesService::with_locator(fake, LocatorOptions::new().with_template_slides([4]));

    let outcome = service.read("tmpl").await.unwrap();
    assert_eq!(outcome.empty_cells.slide_indices(), vec![4]);
}

#[tokio::test]
async fn test_surplus_records_are_reported() {
    let fake = FakeSlides::new().with_document("tmpl", template_deck());
    let service = SlidesService::new(fake.clone());

    // slide 3 takes two records, slide 4 absorbs three but has one row
    let outcome = service.write_records("tmpl", &records(5)).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.count_written, 3);
    assert!(outcome.message.contains("2 records had no free template row"));
    assert_eq!(fake.batches().len(), 1);
}

#[tokio::test]
async fn test_empty_records_are_rejected_before_any_call() {
    let fake = FakeSlides::new().with_document("tmpl", template_deck());
    let service = SlidesService::new(fake.clone());

    let err = service.write_records("tmpl", &[]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
    assert!(fake.batches().is_empty());
}

#[tokio::test]
async fn test_missing_document_on_write() {
    let service = SlidesService::new(FakeSlides::new());
    let err = service.write_records("nope", &records(1)).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(id) if id == "nope"));
}
