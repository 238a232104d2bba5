//! PDF output for imposition
//!
//! This module handles all PDF-specific operations on the output side:
//! - Embedding page images as Image XObjects
//! - Building one output page per composed sheet side
//! - Finalizing the page tree and catalog

mod page;

pub use page::BookletWriter;
