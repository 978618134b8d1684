//! Plan the mutation batch of a write request.
//!
//! Planning is pure; [`crate::service::SlidesService`] submits the result.

use crate::builder::{write_plain, write_title_body};
use crate::error::{Error, Result};
use crate::model::{CellGrid, ContentPair, ContentRecord, Mutation, RowCells};
use std::ops::Range;

/// Point size used for caller-resolved cells.
pub const DIRECT_FONT_SIZE: f64 = 8.0;

/// Point sizes of the template columns.
pub const DEPARTMENT_FONT_SIZE: f64 = 8.0;
pub const IMPACT_FONT_SIZE: f64 = 7.0;
pub const DATA_SOURCES_FONT_SIZE: f64 = 8.0;

/// Records given to each template slide except the last.
pub const RECORDS_PER_SLIDE: usize = 2;

/// Where a record ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the record in the request
    pub record: usize,
    /// Template slide index
    pub slide_index: usize,
    /// 1-based row number on that slide
    pub row: usize,
}

/// Mutations for one request plus what they cover.
#[derive(Debug, Clone, Default)]
pub struct WritePlan {
    /// Batch to submit, in order
    pub mutations: Vec<Mutation>,

    /// Elements written (direct mode) or records placed (templated mode)
    pub count_written: usize,

    /// Record placements (templated mode only)
    pub placements: Vec<Placement>,

    /// Records allocated to a slide without a free row (templated mode only)
    pub unplaced: Vec<usize>,
}

impl WritePlan {
    /// Number of distinct slides that receive content (templated mode).
    pub fn slides_touched(&self) -> usize {
        let mut slides: Vec<usize> = self.placements.iter().map(|p| p.slide_index).collect();
        slides.dedup();
        slides.len()
    }
}

/// Plan a write of caller-resolved pairs. Blank pairs are skipped.
pub fn plan_direct(pairs: &[ContentPair]) -> Result<WritePlan> {
    let mut plan = WritePlan::default();

    for pair in pairs.iter().filter(|p| !p.content.trim().is_empty()) {
        plan.mutations
            .extend(write_plain(&pair.object_id, &pair.content, DIRECT_FONT_SIZE));
        plan.count_written += 1;
    }

    if plan.count_written == 0 {
        return Err(Error::InvalidRequest(
            "No content to write. Ensure elements have non-empty content.".to_string(),
        ));
    }
    Ok(plan)
}

/// Split `record_count` records over `slides` in order: every slide but the
/// last takes up to [`RECORDS_PER_SLIDE`], the last takes the rest.
pub fn allocate_records(slides: &[usize], record_count: usize) -> Vec<(usize, Range<usize>)> {
    let mut allocation = Vec::new();
    let mut next = 0;

    for (pos, &slide_index) in slides.iter().enumerate() {
        let remaining = record_count - next;
        if remaining == 0 {
            break;
        }
        let take = if pos + 1 == slides.len() {
            remaining
        } else {
            remaining.min(RECORDS_PER_SLIDE)
        };
        allocation.push((slide_index, next..next + take));
        next += take;
    }

    allocation
}

/// Plan a write of structured records into the template grid.
pub fn plan_records(grid: &CellGrid, records: &[ContentRecord]) -> Result<WritePlan> {
    if records.is_empty() {
        return Err(Error::InvalidRequest("No records provided".to_string()));
    }
    if grid.is_empty() {
        return Err(Error::InvalidRequest(
            "No template table found in the presentation".to_string(),
        ));
    }

    let mut plan = WritePlan::default();

    for (slide_index, assigned) in allocate_records(&grid.slide_indices(), records.len()) {
        let rows = grid.rows(slide_index).unwrap_or_default();

        for (offset, record_idx) in assigned.enumerate() {
            let Some(row) = rows.get(offset) else {
                plan.unplaced.push(record_idx);
                continue;
            };
            plan.mutations.extend(fill_row(row, &records[record_idx]));
            plan.placements.push(Placement {
                record: record_idx,
                slide_index,
                row: offset + 1,
            });
            plan.count_written += 1;
        }
    }

    if !plan.unplaced.is_empty() {
        log::warn!(
            "{} record(s) had no free template row: {:?}",
            plan.unplaced.len(),
            plan.unplaced
        );
    }
    Ok(plan)
}

/// Mutations writing one record into one row. Blank fields are left untouched.
pub fn fill_row(row: &RowCells, record: &ContentRecord) -> Vec<Mutation> {
    let mut mutations = Vec::new();

    if !record.is_untitled_and_empty() {
        let body = format!(" {}", record.description);
        mutations.extend(write_title_body(&row.description, &record.heading(), &body));
    }

    let plain = [
        (&row.department, &record.department, DEPARTMENT_FONT_SIZE),
        (&row.impact, &record.impact, IMPACT_FONT_SIZE),
        (&row.data_sources, &record.data_sources, DATA_SOURCES_FONT_SIZE),
    ];
    for (object_id, text, size) in plain {
        if !text.trim().is_empty() {
            mutations.extend(write_plain(object_id, text, size));
        }
    }

    mutations
}
