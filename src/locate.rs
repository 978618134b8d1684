//! Find the empty table cells of template slides.
//!
//! Template tables are drawn as loose shapes rather than real tables, so rows
//! are recovered from geometry: blank elements that share a y position form a
//! row, and their left-to-right order gives the column roles.

use crate::config::LocatorOptions;
use crate::model::{CellGrid, ColumnRole, Element, RowCells, Slide};

/// Blank elements aligned on the same line.
type RowCluster<'a> = Vec<&'a Element>;

/// Build the cell grid for all template slides.
pub fn locate_cells(slides: &[Slide], options: &LocatorOptions) -> CellGrid {
    let mut grid = CellGrid::new();

    for slide in slides.iter().filter(|s| options.is_template(s.slide_index)) {
        let rows = locate_rows(slide, options.row_tolerance);
        log::debug!(
            "Slide {} ({}): {} template rows",
            slide.slide_index,
            slide.slide_id,
            rows.len()
        );
        grid.insert_slide(slide.slide_index, rows);
    }

    grid
}

/// Rows of a single slide, top to bottom.
pub fn locate_rows(slide: &Slide, tolerance: f64) -> Vec<RowCells> {
    let candidates: Vec<&Element> = slide
        .elements
        .iter()
        .filter(|e| e.is_blank() && e.has_geometry())
        .collect();

    cluster_rows(candidates, tolerance)
        .into_iter()
        .filter(|cluster| cluster.len() >= ColumnRole::ALL.len())
        .filter_map(|mut cluster| {
            cluster.sort_by(|a, b| x_of(a).total_cmp(&x_of(b)));
            let ids: Vec<&str> = cluster.iter().map(|e| e.object_id.as_str()).collect();
            RowCells::from_ordered(&ids)
        })
        .collect()
}

/// Single-linkage clustering on y: neighbours no further apart than
/// `tolerance` share a cluster. Clusters come out in ascending y.
fn cluster_rows(mut elements: Vec<&Element>, tolerance: f64) -> Vec<RowCluster<'_>> {
    elements.sort_by(|a, b| y_of(a).total_cmp(&y_of(b)));

    let mut clusters: Vec<RowCluster<'_>> = Vec::new();
    let mut last_y = f64::NEG_INFINITY;

    for element in elements {
        let y = y_of(element);
        match clusters.last_mut() {
            Some(cluster) if y - last_y <= tolerance => cluster.push(element),
            _ => clusters.push(vec![element]),
        }
        last_y = y;
    }

    clusters
}

fn x_of(element: &Element) -> f64 {
    element.position.map(|p| p.x).unwrap_or_default()
}

fn y_of(element: &Element) -> f64 {
    element.position.map(|p| p.y).unwrap_or_default()
}
