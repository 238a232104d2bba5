//! Booklet generation - turning a source document into a folded booklet
//!
//! This module orchestrates one run:
//! 1. Resolve the page range and build the imposition plan
//! 2. Compose every sheet side from rasterized pages
//! 3. Finalize the output document and save it atomically
//!
//! The composition itself is synchronous and runs on a blocking thread; the
//! async entry points only wrap it and publish progress.

mod io;

pub use io::{read_page_count, save_pdf};

use crate::compose::{ComposeSummary, SheetComposer};
use crate::layout::{PageRange, sequence};
use crate::options::BookletOptions;
use crate::progress::{ProgressHandle, ProgressReporter, progress_channel};
use crate::raster::PageSource;
use crate::render::BookletWriter;
use crate::types::*;
use lopdf::Document;
use std::path::PathBuf;
use tokio::task::JoinHandle;

/// An imposed booklet that has not been saved yet
#[derive(Debug)]
pub struct ImposedBooklet {
    pub document: Document,
    pub range: PageRange,
    pub summary: ComposeSummary,
}

/// Outcome of a saved booklet run
#[derive(Debug, Clone, PartialEq)]
pub struct BookletReport {
    pub output_path: PathBuf,
    pub range: PageRange,
    /// Pages in the saved document
    pub output_pages: usize,
    pub summary: ComposeSummary,
}

/// Impose every page of `source` selected by `options`.
pub fn impose_source<S>(
    source: &mut S,
    options: &BookletOptions,
    reporter: &ProgressReporter,
) -> Result<ImposedBooklet>
where
    S: PageSource + ?Sized,
{
    options.validate()?;

    let range = options.page_range(source.page_count());
    if range.is_empty() {
        return Err(BookletError::NoPages);
    }

    let plan = sequence(&range, options.sheets_per_signature, options.rotate_back)?;
    log::info!(
        "Imposing pages {} to {} onto {} sheet(s)",
        range.first() + 1,
        range.last(),
        plan.sheet_count()
    );

    let (width_pt, height_pt) = options.sheet_size_pt();
    let composer = SheetComposer::new(width_pt, height_pt).with_blank_sheets(options.blank_sheets);
    let mut writer = BookletWriter::new();
    let summary = composer.compose(&plan, source, &mut writer, reporter)?;

    Ok(ImposedBooklet {
        document: writer.finish(),
        range,
        summary,
    })
}

/// Impose a PDF file through Pdfium
#[cfg(feature = "pdfium")]
pub fn impose_file(
    input: impl AsRef<std::path::Path>,
    options: &BookletOptions,
    reporter: &ProgressReporter,
) -> Result<ImposedBooklet> {
    use crate::raster::{PdfiumSource, init_pdfium};

    let pdfium = init_pdfium()?;
    let mut source = PdfiumSource::open(&pdfium, input, options.dpi, options.color_mode)?;
    impose_source(&mut source, options, reporter)
}

/// Generate a booklet from `input` and save it to `output`
#[cfg(feature = "pdfium")]
pub async fn generate_booklet(
    input: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
    options: &BookletOptions,
) -> Result<BookletReport> {
    let input = input.into();
    let options = options.clone();
    run_job(
        output.into(),
        move |reporter| impose_file(&input, &options, reporter),
        ProgressReporter::detached(),
    )
    .await
}

/// Start generating a booklet in the background.
///
/// Must be called from within a Tokio runtime.
#[cfg(feature = "pdfium")]
pub fn spawn_booklet(
    input: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
    options: &BookletOptions,
) -> BookletJob {
    let input = input.into();
    let options = options.clone();
    spawn_job(output, move |reporter| {
        impose_file(&input, &options, reporter)
    })
}

/// Start a booklet job around any imposition closure.
///
/// `work` runs on a blocking thread and must open its own source there; the
/// result is saved to `output` once it returns.
pub fn spawn_job<F>(output: impl Into<PathBuf>, work: F) -> BookletJob
where
    F: FnOnce(&ProgressReporter) -> Result<ImposedBooklet> + Send + 'static,
{
    let (reporter, progress) = progress_channel();
    let task = tokio::spawn(run_job(output.into(), work, reporter));
    BookletJob { progress, task }
}

async fn run_job<F>(output: PathBuf, work: F, reporter: ProgressReporter) -> Result<BookletReport>
where
    F: FnOnce(&ProgressReporter) -> Result<ImposedBooklet> + Send + 'static,
{
    let imposed = tokio::task::spawn_blocking(move || work(&reporter)).await??;

    let output_pages = imposed.document.get_pages().len();
    save_pdf(imposed.document, &output).await?;
    log::info!("Booklet written to {}", output.display());

    Ok(BookletReport {
        output_path: output,
        range: imposed.range,
        output_pages,
        summary: imposed.summary,
    })
}

/// A booklet run in progress
#[derive(Debug)]
pub struct BookletJob {
    progress: ProgressHandle,
    task: JoinHandle<Result<BookletReport>>,
}

impl BookletJob {
    /// A handle for watching progress (and cancelling) from elsewhere
    pub fn progress(&self) -> ProgressHandle {
        self.progress.clone()
    }

    /// Stop at the next sheet boundary; nothing is saved
    pub fn cancel(&self) {
        self.progress.cancel();
    }

    /// Wait for the run to finish
    pub async fn wait(self) -> Result<BookletReport> {
        self.task.await?
    }
}
