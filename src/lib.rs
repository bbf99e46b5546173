//! # pdfpages
//!
//! Page-by-page plain text extraction from PDF documents.
//!
//! Parsing and text extraction are delegated to [`lopdf`]; this crate
//! opens the file, walks its pages in order and prints a report with the
//! page count and each page's text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpages::{run, ExtractOptions};
//!
//! fn main() -> std::io::Result<()> {
//!     let stdout = std::io::stdout();
//!     // Prints the report, or a single "Error reading PDF: ..." line.
//!     run("document.pdf", &ExtractOptions::default(), &mut stdout.lock())
//! }
//! ```
//!
//! Callers that want to handle errors themselves can use [`extract`] or
//! work with [`PdfDocument`] directly.

pub mod detect;
pub mod document;
pub mod error;
pub mod info;
pub mod options;
pub mod report;

pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use document::{Page, PdfDocument};
pub use error::{Error, Result};
pub use info::DocumentInfo;
pub use options::{ExtractOptions, PageSelection};
pub use report::{extract, run, to_report, write_report, ERROR_PREFIX, SEPARATOR};

use std::path::Path;

/// File read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "Advanced Topics TAU 2025B - Assignment 3.pdf";

/// Open a PDF file.
///
/// # Example
///
/// ```no_run
/// let doc = pdfpages::open("document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> Result<PdfDocument> {
    PdfDocument::open(path)
}

/// Extract the text of every page, in order.
///
/// # Example
///
/// ```no_run
/// let pages = pdfpages::extract_pages("document.pdf").unwrap();
/// for (i, text) in pages.iter().enumerate() {
///     println!("page {}: {} chars", i + 1, text.len());
/// }
/// ```
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = PdfDocument::open(path)?;
    doc.pages().map(|page| page.extract_text()).collect()
}

/// Render the full report for a file into a string.
pub fn report_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<String> {
    let doc = PdfDocument::open(path)?;
    to_report(&doc, options)
}
