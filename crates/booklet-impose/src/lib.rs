pub mod booklet;
mod compose;
pub mod constants;
pub mod layout;
mod options;
mod progress;
pub mod raster;
mod render;
mod stats;
mod types;

#[cfg(feature = "pdfium")]
pub use booklet::{generate_booklet, impose_file, spawn_booklet};
pub use booklet::{
    BookletJob, BookletReport, ImposedBooklet, impose_source, read_page_count, save_pdf, spawn_job,
};
pub use compose::*;
pub use layout::{FitTransform, ImpositionPlan, PageRange, SheetAssignment, SidePlan, Viewport};
pub use options::*;
pub use progress::*;
pub use raster::PageSource;
pub use render::BookletWriter;
pub use stats::calculate_statistics;
pub use types::*;
