//! Cell grid: addressable table cells found on template slides.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column role of a cell, assigned left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Description,
    Department,
    Impact,
    DataSources,
}

impl ColumnRole {
    /// Roles in left-to-right column order.
    pub const ALL: [ColumnRole; 4] = [
        ColumnRole::Description,
        ColumnRole::Department,
        ColumnRole::Impact,
        ColumnRole::DataSources,
    ];

    /// Key used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Description => "description",
            ColumnRole::Department => "department",
            ColumnRole::Impact => "impact",
            ColumnRole::DataSources => "data_sources",
        }
    }
}

/// Element identifiers of one table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCells {
    pub description: String,
    pub department: String,
    pub impact: String,
    pub data_sources: String,
}

impl RowCells {
    /// Build a row from element ids ordered left to right.
    ///
    /// Returns `None` when fewer ids than roles are given; extra ids are ignored.
    pub fn from_ordered<S: AsRef<str>>(ids: &[S]) -> Option<Self> {
        if ids.len() < ColumnRole::ALL.len() {
            return None;
        }
        Some(Self {
            description: ids[0].as_ref().to_string(),
            department: ids[1].as_ref().to_string(),
            impact: ids[2].as_ref().to_string(),
            data_sources: ids[3].as_ref().to_string(),
        })
    }

    /// Element id holding the given role.
    pub fn get(&self, role: ColumnRole) -> &str {
        match role {
            ColumnRole::Description => &self.description,
            ColumnRole::Department => &self.department,
            ColumnRole::Impact => &self.impact,
            ColumnRole::DataSources => &self.data_sources,
        }
    }
}

/// Table rows per template slide, keyed by 1-based slide index.
///
/// Serializes as `{"slide_3": {"row1": {"description": "...", ...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    slides: BTreeMap<usize, Vec<RowCells>>,
}

impl CellGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rows of a slide (top to bottom). Slides without rows are skipped.
    pub fn insert_slide(&mut self, slide_index: usize, rows: Vec<RowCells>) {
        if !rows.is_empty() {
            self.slides.insert(slide_index, rows);
        }
    }

    /// Rows of a slide, top to bottom.
    pub fn rows(&self, slide_index: usize) -> Option<&[RowCells]> {
        self.slides.get(&slide_index).map(Vec::as_slice)
    }

    /// Look up a single cell by slide, 1-based row number and role.
    pub fn cell(&self, slide_index: usize, row: usize, role: ColumnRole) -> Option<&str> {
        let rows = self.rows(slide_index)?;
        rows.get(row.checked_sub(1)?).map(|r| r.get(role))
    }

    /// Iterate slides in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[RowCells])> {
        self.slides.iter().map(|(idx, rows)| (*idx, rows.as_slice()))
    }

    /// Template slide indices in ascending order.
    pub fn slide_indices(&self) -> Vec<usize> {
        self.slides.keys().copied().collect()
    }

    /// Number of slides with at least one row.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when no template rows were found.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Total rows across all slides.
    pub fn total_rows(&self) -> usize {
        self.slides.values().map(Vec::len).sum()
    }
}

/// Label for a 0-based row position.
pub fn row_label(position: usize) -> String {
    format!("row{}", position + 1)
}

/// Key for a slide index in JSON output.
pub fn slide_key(slide_index: usize) -> String {
    format!("slide_{}", slide_index)
}

struct LabelledRows<'a>(&'a [RowCells]);

impl Serialize for LabelledRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pos, row) in self.0.iter().enumerate() {
            map.serialize_entry(&row_label(pos), row)?;
        }
        map.end()
    }
}

impl Serialize for CellGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slides.len()))?;
        for (idx, rows) in &self.slides {
            map.serialize_entry(&slide_key(*idx), &LabelledRows(rows))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(prefix: &str) -> RowCells {
        let ids: Vec<String> = (0..4).map(|i| format!("{}{}", prefix, i)).collect();
        RowCells::from_ordered(&ids).unwrap()
    }

    #[test]
    fn test_from_ordered_requires_four() {
        assert!(RowCells::from_ordered(&["a", "b", "c"]).is_none());
        let r = RowCells::from_ordered(&["a", "b", "c", "d", "e"]).unwrap();
        assert_eq!(r.get(ColumnRole::DataSources), "d");
    }

    #[test]
    fn test_empty_slides_are_skipped() {
        let mut grid = CellGrid::new();
        grid.insert_slide(3, Vec::new());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cell_lookup() {
        let mut grid = CellGrid::new();
        grid.insert_slide(4, vec![row("a"), row("b")]);
        assert_eq!(grid.cell(4, 2, ColumnRole::Department), Some("b1"));
        assert_eq!(grid.cell(4, 0, ColumnRole::Department), None);
        assert_eq!(grid.cell(4, 3, ColumnRole::Department), None);
        assert_eq!(grid.total_rows(), 2);
    }

    #[test]
    fn test_serialization_shape() {
        let mut grid = CellGrid::new();
        grid.insert_slide(10, vec![row("x")]);
        grid.insert_slide(3, vec![row("a"), row("b")]);

        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["slide_3"]["row2"]["description"], "b0");
        assert_eq!(json["slide_10"]["row1"]["data_sources"], "x3");
        assert_eq!(grid.slide_indices(), vec![3, 10]);
    }
}
