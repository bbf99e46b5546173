//! Page-by-page text report.
//!
//! The report is a header with the page count followed by one block per
//! page:
//!
//! ```text
//! PDF has 2 pages
//! ==================================================
//!
//! --- Page 1 ---
//! Hello
//! ==================================================
//!
//! --- Page 2 ---
//! World
//! ==================================================
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::document::PdfDocument;
use crate::error::Result;
use crate::options::ExtractOptions;

/// Line printed after the header and after every page.
pub const SEPARATOR: &str = "==================================================";

/// Prefix of the single line printed when extraction fails.
pub const ERROR_PREFIX: &str = "Error reading PDF:";

/// Write the report for an opened document.
///
/// Pages are written as soon as their text is extracted, so a failure on
/// a later page leaves the earlier blocks in `out`.
pub fn write_report<W: Write>(
    doc: &PdfDocument,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<()> {
    let count = doc.page_count();
    options.pages.validate(count)?;

    writeln!(out, "PDF has {} pages", count)?;
    writeln!(out, "{}", SEPARATOR)?;

    let mut written = 0usize;
    for page in doc.pages().filter(|p| options.pages.includes(p.number())) {
        let text = page.extract_text()?;
        write_page_block(out, page.number(), &text)?;
        written += 1;
    }

    if written == 0 && count > 0 {
        log::warn!("Page selection matched none of {} pages", count);
    }
    out.flush()?;
    Ok(())
}

fn write_page_block<W: Write>(out: &mut W, number: u32, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Page {} ---", number)?;
    writeln!(out, "{}", text.trim_end_matches(['\r', '\n']))?;
    writeln!(out, "{}", SEPARATOR)
}

/// Render the report for an opened document into a string.
pub fn to_report(doc: &PdfDocument, options: &ExtractOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_report(doc, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Open `path` and write its report to `out`.
pub fn extract<P: AsRef<Path>, W: Write>(
    path: P,
    options: &ExtractOptions,
    out: &mut W,
) -> Result<()> {
    let doc = PdfDocument::open(path)?;
    write_report(&doc, options, out)
}

/// Open `path`, write its report to `out`, and turn any failure into a
/// single `Error reading PDF: ...` line.
///
/// Only a failure to write that error line is returned.
///
/// # Example
///
/// ```no_run
/// use pdfpages::{run, ExtractOptions};
///
/// let stdout = std::io::stdout();
/// run("document.pdf", &ExtractOptions::default(), &mut stdout.lock())?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    options: &ExtractOptions,
    out: &mut W,
) -> io::Result<()> {
    match extract(path.as_ref(), options, out) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::debug!("Extraction of {} failed: {:?}", path.as_ref().display(), e);
            report_failure(out, &e)
        }
    }
}

/// Write the error line for a failed extraction.
pub fn report_failure<W: Write, E: std::fmt::Display>(out: &mut W, err: &E) -> io::Result<()> {
    writeln!(out, "{} {}", ERROR_PREFIX, err)?;
    out.flush()
}
