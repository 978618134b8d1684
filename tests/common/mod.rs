//! Shared fixtures: an in-memory Slides API and sample presentations.

#![allow(dead_code)]

use serde_json::{json, Value};
use slidefill::api::{BatchAck, Presentation, SlidesApi};
use slidefill::{Error, Mutation, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A submitted batch.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub document_id: String,
    pub requests: Vec<Mutation>,
}

/// Slides API backed by a map of presentations.
#[derive(Clone, Default)]
pub struct FakeSlides {
    documents: Arc<HashMap<String, Presentation>>,
    denied: Arc<Vec<String>>,
    batches: Arc<Mutex<Vec<Submitted>>>,
    reject_batches_with: Option<u16>,
    panic_on_read: bool,
}

impl FakeSlides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, id: &str, tree: Value) -> Self {
        let presentation: Presentation = serde_json::from_value(tree).expect("valid fixture");
        Arc::make_mut(&mut self.documents).insert(id.to_string(), presentation);
        self
    }

    pub fn with_denied(mut self, id: &str) -> Self {
        Arc::make_mut(&mut self.denied).push(id.to_string());
        self
    }

    pub fn rejecting_batches(mut self, status: u16) -> Self {
        self.reject_batches_with = Some(status);
        self
    }

    pub fn panicking_on_read(mut self) -> Self {
        self.panic_on_read = true;
        self
    }

    pub fn batches(&self) -> Vec<Submitted> {
        self.batches.lock().unwrap().clone()
    }
}

impl SlidesApi for FakeSlides {
    async fn get_presentation(&self, document_id: &str) -> Result<Presentation> {
        if self.panic_on_read {
            panic!("presentation tree for {} is corrupt", document_id);
        }
        if self.denied.iter().any(|d| d == document_id) {
            return Err(Error::from_status(403, document_id, "denied"));
        }
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| Error::from_status(404, document_id, "not found"))
    }

    async fn batch_update(&self, document_id: &str, requests: &[Mutation]) -> Result<BatchAck> {
        if let Some(status) = self.reject_batches_with {
            return Err(Error::from_status(status, document_id, "batch rejected"));
        }
        if !self.documents.contains_key(document_id) {
            return Err(Error::from_status(404, document_id, "not found"));
        }
        self.batches.lock().unwrap().push(Submitted {
            document_id: document_id.to_string(),
            requests: requests.to_vec(),
        });
        Ok(BatchAck {
            presentation_id: document_id.to_string(),
            replies: vec![json!({}); requests.len()],
        })
    }
}

/// A blank shape at (x, y).
pub fn blank_cell(id: &str, x: f64, y: f64) -> Value {
    json!({
        "objectId": id,
        "shape": {"shapeType": "RECTANGLE"},
        "transform": {"scaleX": 1.0, "scaleY": 1.0, "translateX": x, "translateY": y, "unit": "EMU"}
    })
}

/// Four blank cells forming one table row.
pub fn blank_row(prefix: &str, y: f64) -> Vec<Value> {
    ["desc", "dept", "impact", "sources"]
        .iter()
        .enumerate()
        .map(|(i, role)| blank_cell(&format!("{}-{}", prefix, role), 100.0 + i as f64 * 1000.0, y))
        .collect()
}

/// A text box with content.
pub fn text_box(id: &str, text: &str) -> Value {
    json!({
        "objectId": id,
        "shape": {"shapeType": "TEXT_BOX", "text": {"textElements": [
            {"endIndex": 1, "paragraphMarker": {"style": {}}},
            {"textRun": {"content": text, "style": {}}}
        ]}},
        "transform": {"scaleX": 1.0, "scaleY": 1.0, "translateX": 0.0, "translateY": 0.0}
    })
}

/// Two plain slides.
pub fn two_slide_deck() -> Value {
    json!({
        "presentationId": "deck-2",
        "title": "Quarterly review",
        "slides": [
            {"objectId": "p1", "pageElements": [text_box("title", "Quarterly review\n")]},
            {"objectId": "p2", "pageElements": [
                text_box("body", "Agenda\n"),
                {"objectId": "logo", "image": {"contentUrl": "https://example.com/logo.png"}}
            ]}
        ]
    })
}

/// Six slides; slide 3 holds two empty rows, slide 4 one.
pub fn template_deck() -> Value {
    let mut slide3 = vec![text_box("s3-header", "Use cases\n")];
    slide3.extend(blank_row("s3r1", 2_000_000.0));
    slide3.extend(blank_row("s3r2", 3_000_000.0));

    let mut slide4 = vec![text_box("s4-header", "More use cases\n")];
    slide4.extend(blank_row("s4r1", 2_000_000.0));

    json!({
        "presentationId": "tmpl",
        "title": "Use case template",
        "slides": [
            {"objectId": "p1", "pageElements": [text_box("cover", "Cover\n")]},
            {"objectId": "p2", "pageElements": []},
            {"objectId": "p3", "pageElements": slide3},
            {"objectId": "p4", "pageElements": slide4},
            {"objectId": "p5"},
            {"objectId": "p6", "pageElements": [text_box("outro", "Thanks\n")]}
        ]
    })
}
