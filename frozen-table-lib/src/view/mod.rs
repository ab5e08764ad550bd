//! Derivation of the displayed rows
//!
//! Row store → filter → sort → incremental reveal, owned by [`TableView`],
//! and the [`GridModel`] handed to whatever paints the table.

mod filter;
mod grid;
mod pipeline;
mod reveal;
mod sort;

pub use filter::*;
pub use grid::*;
pub use pipeline::*;
pub use reveal::*;
pub use sort::*;
