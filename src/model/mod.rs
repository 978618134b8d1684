//! Flat data model shared by the reader and the writer.
//!
//! The extractor turns the remote presentation tree into [`Slide`]s, the cell
//! locator turns slides into a [`CellGrid`], and the writer turns caller
//! records into [`Mutation`]s.

mod grid;
mod mutation;
mod record;
mod slide;

pub use grid::*;
pub use mutation::*;
pub use record::*;
pub use slide::*;
