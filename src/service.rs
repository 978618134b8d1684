//! Read and write operations against a presentation.

use crate::api::SlidesApi;
use crate::config::LocatorOptions;
use crate::error::{Error, Result};
use crate::extract::extract_deck;
use crate::locate::locate_cells;
use crate::model::{
    legacy_to_pairs, parse_legacy_slides, CellGrid, ContentPair, ContentRecord, Deck, Slide,
};
use crate::write::{plan_direct, plan_records, WritePlan};
use serde::Serialize;

/// Public URL of a presentation.
pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/presentation/d/{}", document_id)
}

/// Flattened presentation plus its template cells.
#[derive(Debug, Clone, Serialize)]
pub struct ReadOutcome {
    pub document_id: String,
    pub title: String,
    pub total_slides: usize,
    pub slides: Vec<Slide>,
    pub empty_cells: CellGrid,
}

impl ReadOutcome {
    fn new(deck: Deck, empty_cells: CellGrid) -> Self {
        Self {
            total_slides: deck.total_slides(),
            document_id: deck.document_id,
            title: deck.title,
            slides: deck.slides,
            empty_cells,
        }
    }
}

/// Result of a submitted batch.
///
/// `success` means the Slides API accepted the batch; it makes no claim about
/// durability beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub success: bool,
    pub message: String,
    pub count_written: usize,
    pub document_url: String,
}

/// Reader and writer over an injected Slides API client.
#[derive(Debug, Clone)]
pub struct SlidesService<C> {
    client: C,
    locator: LocatorOptions,
}

impl<C: SlidesApi> SlidesService<C> {
    /// Create a service with default template detection.
    pub fn new(client: C) -> Self {
        Self::with_locator(client, LocatorOptions::default())
    }

    /// Create a service with custom template detection.
    pub fn with_locator(client: C, locator: LocatorOptions) -> Self {
        Self { client, locator }
    }

    /// Fetch and flatten a presentation.
    pub async fn read_deck(&self, document_id: &str) -> Result<Deck> {
        let document_id = require_document_id(document_id)?;
        let presentation = self.client.get_presentation(document_id).await?;
        Ok(extract_deck(&presentation, document_id))
    }

    /// Fetch a presentation and locate its template cells.
    pub async fn read(&self, document_id: &str) -> Result<ReadOutcome> {
        log::info!("Reading slides for document: {}", document_id);

        let deck = self.read_deck(document_id).await?;
        let grid = locate_cells(&deck.slides, &self.locator);

        log::info!(
            "Read {} slides from {}, {} template rows on {} slides",
            deck.total_slides(),
            document_id,
            grid.total_rows(),
            grid.len()
        );
        Ok(ReadOutcome::new(deck, grid))
    }

    /// Write caller-resolved element contents.
    pub async fn write_pairs(&self, document_id: &str, pairs: &[ContentPair]) -> Result<WriteOutcome> {
        let document_id = require_document_id(document_id)?;
        if pairs.is_empty() {
            return Err(Error::InvalidRequest("No content pairs provided".to_string()));
        }

        let plan = plan_direct(pairs)?;
        let message = format!("Submitted content to {} elements", plan.count_written);
        self.submit(document_id, plan, message).await
    }

    /// Write the legacy `slides_data_json` payload: a JSON-encoded list of
    /// slides whose elements carry `object_id` and `content`.
    pub async fn write_slides_json(&self, document_id: &str, slides_json: &str) -> Result<WriteOutcome> {
        let document_id = require_document_id(document_id)?;
        let slides = parse_legacy_slides(slides_json)?;
        if slides.is_empty() {
            return Err(Error::InvalidRequest(
                "No slides data provided. Ensure slides_data_json contains slide elements with object_id and content."
                    .to_string(),
            ));
        }

        let slide_count = slides.len();
        let plan = plan_direct(&legacy_to_pairs(slides))?;
        let message = format!(
            "Submitted content to {} elements across {} slides",
            plan.count_written, slide_count
        );
        self.submit(document_id, plan, message).await
    }

    /// Write structured records into the template table.
    pub async fn write_records(
        &self,
        document_id: &str,
        records: &[ContentRecord],
    ) -> Result<WriteOutcome> {
        let document_id = require_document_id(document_id)?;
        if records.is_empty() {
            return Err(Error::InvalidRequest("No records provided".to_string()));
        }

        let deck = self.read_deck(document_id).await?;
        let grid = locate_cells(&deck.slides, &self.locator);
        let plan = plan_records(&grid, records)?;

        let mut message = format!(
            "Submitted {} of {} records across {} slides",
            plan.count_written,
            records.len(),
            plan.slides_touched()
        );
        if !plan.unplaced.is_empty() {
            message.push_str(&format!(
                "; {} records had no free template row",
                plan.unplaced.len()
            ));
        }
        self.submit(document_id, plan, message).await
    }

    async fn submit(&self, document_id: &str, plan: WritePlan, message: String) -> Result<WriteOutcome> {
        if plan.mutations.is_empty() {
            return Err(Error::InvalidRequest(
                "No content to write. Ensure records have non-empty fields.".to_string(),
            ));
        }

        log::info!(
            "Submitting {} requests to {}",
            plan.mutations.len(),
            document_id
        );
        let ack = self.client.batch_update(document_id, &plan.mutations).await?;
        log::debug!("Batch accepted with {} replies", ack.replies.len());

        Ok(WriteOutcome {
            success: true,
            message,
            count_written: plan.count_written,
            document_url: document_url(document_id),
        })
    }
}

fn require_document_id(document_id: &str) -> Result<&str> {
    let trimmed = document_id.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidRequest("document_id is required".to_string()));
    }
    Ok(trimmed)
}
