//! Document I/O for booklet generation

use crate::types::*;
use lopdf::Document;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Count the pages of a PDF without rendering it.
///
/// With the `pdfium` feature the count comes from the same parser that renders
/// the pages, so damaged files Pdfium can repair are counted the same way they
/// will be imposed. lopdf is used when Pdfium is not built in or cannot be
/// bound.
pub async fn read_page_count(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref().to_owned();

    #[cfg(feature = "pdfium")]
    {
        let pdfium_path = path.clone();
        let counted =
            tokio::task::spawn_blocking(move || count_with_pdfium(&pdfium_path)).await?;
        if let Some(count) = counted {
            return count;
        }
    }

    count_with_lopdf(&path).await
}

/// `None` when the Pdfium library is unavailable
#[cfg(feature = "pdfium")]
fn count_with_pdfium(path: &Path) -> Option<Result<usize>> {
    use crate::constants::DEFAULT_DPI;
    use crate::raster::{PageSource, PdfiumSource, init_pdfium};

    let pdfium = match init_pdfium() {
        Ok(pdfium) => pdfium,
        Err(e) => {
            log::debug!("Pdfium unavailable ({}), counting pages with lopdf", e);
            return None;
        }
    };
    let count =
        PdfiumSource::open(&pdfium, path, DEFAULT_DPI, ColorMode::Gray).map(|s| s.page_count());
    Some(count)
}

async fn count_with_lopdf(path: &Path) -> Result<usize> {
    let bytes = tokio::fs::read(path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc.get_pages().len())
}

/// Save the booklet.
///
/// The bytes go to a `.partial` sibling first and are renamed into place only
/// once fully written, so a failed save never leaves a truncated file at
/// `path`.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, BookletError>(writer)
    })
    .await??;

    let partial = partial_path(&path);
    let written = async {
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, &path).await
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    Ok(())
}

pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("booklet.pdf"));
    name.push(".partial");
    path.with_file_name(name)
}
