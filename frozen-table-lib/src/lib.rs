//! Frozen-column table engine
//!
//! Loads a tabular dataset from an HTTP endpoint and derives the rows a table
//! view should display: search filtering, header-driven sorting and
//! incremental reveal in fixed batches. Painting is left to the caller, which
//! receives a [`view::GridModel`] describing pinned and scrollable cells.

pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod view;

mod client;

pub use client::*;
pub use config::TableConfig;
pub use load::LoadState;
