//! # slidefill
//!
//! Read Google Slides presentations as a flat element list and fill the empty
//! table cells of template slides through the Slides API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slidefill::{Config, ContentRecord, GoogleSlides, SlidesService};
//!
//! # async fn run() -> slidefill::Result<()> {
//! let config = Config::from_env()?;
//! let service = SlidesService::with_locator(GoogleSlides::new(&config)?, config.locator.clone());
//!
//! // Flattened slides and the template cells found on them
//! let outcome = service.read("1AbC...").await?;
//! println!("Slides: {}", outcome.total_slides);
//!
//! // Fill the template table with records
//! let records = vec![ContentRecord {
//!     number: "1".into(),
//!     title: "Demand forecast".into(),
//!     description: "Weekly forecast per region".into(),
//!     department: "Ops".into(),
//!     impact: "High".into(),
//!     data_sources: "ERP".into(),
//! }];
//! let written = service.write_records("1AbC...", &records).await?;
//! println!("{}", written.message);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building blocks
//!
//! The pieces are usable without a network connection:
//!
//! - [`extract`]: presentation tree to [`Slide`]s
//! - [`locate`]: slides to a [`CellGrid`] of template cells
//! - [`builder`]: text and style [`Mutation`]s for one cell
//! - [`write`]: placement of a whole request into one batch

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod locate;
pub mod model;
pub mod server;
pub mod service;
pub mod write;

// Re-exports
pub use api::{BatchAck, GoogleSlides, Presentation, SlidesApi};
pub use config::{Config, LocatorOptions};
pub use error::{Error, Result};
pub use model::{
    CellGrid, ColumnRole, ContentPair, ContentRecord, Deck, Element, ElementKind, Mutation,
    Position, RowCells, Size, Slide,
};
pub use service::{document_url, ReadOutcome, SlidesService, WriteOutcome};

/// Fetch a presentation and return its flattened slides and template cells.
///
/// Convenience wrapper building a [`GoogleSlides`] client from `config`.
pub async fn read_document(config: &Config, document_id: &str) -> Result<ReadOutcome> {
    let service = SlidesService::with_locator(GoogleSlides::new(config)?, config.locator.clone());
    service.read(document_id).await
}
