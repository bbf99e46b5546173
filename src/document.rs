//! PDF document handle backed by lopdf.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_format_from_bytes, PdfFormat};
use crate::error::{Error, Result};

/// An opened PDF document.
///
/// Encrypted documents are refused when opened, so a `PdfDocument` is
/// always readable without a password.
///
/// The underlying file is only held while the document is being read;
/// once constructed, the handle owns the parsed object graph and nothing
/// else.
pub struct PdfDocument {
    doc: LopdfDocument,
    format: PdfFormat,
    page_count: usize,
}

impl PdfDocument {
    /// Open a PDF file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pdfpages::PdfDocument;
    ///
    /// let doc = PdfDocument::open("document.pdf")?;
    /// for page in doc.pages() {
    ///     println!("{}: {}", page.number(), page.extract_text()?);
    /// }
    /// # Ok::<(), pdfpages::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let format = detect_format_from_bytes(data)?;
        let body = &data[format.header_offset..];

        let doc = LopdfDocument::load_mem(body)?;

        if doc.is_encrypted() {
            log::warn!("Refusing encrypted document (PDF {})", format.version);
            return Err(Error::Encrypted);
        }

        let page_count = doc.get_pages().len();
        log::debug!("Loaded PDF {} with {} pages", format.version, page_count);

        Ok(Self {
            doc,
            format,
            page_count,
        })
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Get the page at a 0-based index.
    pub fn page(&self, index: usize) -> Result<Page<'_>> {
        if index >= self.page_count {
            let count = u32::try_from(self.page_count).unwrap_or(u32::MAX);
            return Err(Error::PageOutOfRange(page_number(index), count));
        }
        Ok(Page { doc: self, index })
    }

    /// Iterate over all pages in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> + '_ {
        (0..self.page_count).map(move |index| Page { doc: self, index })
    }

    /// Header format sniffed when the document was opened.
    pub fn format(&self) -> &PdfFormat {
        &self.format
    }

    /// Get PDF version as declared by the document.
    pub fn version(&self) -> &str {
        &self.doc.version
    }

    /// Direct access to the underlying `lopdf::Document`.
    pub(crate) fn raw_doc(&self) -> &LopdfDocument {
        &self.doc
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("format", &self.format)
            .field("pages", &self.page_count)
            .finish()
    }
}

/// A read-only view of one page.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    doc: &'a PdfDocument,
    index: usize,
}

impl Page<'_> {
    /// 0-based position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number, as shown to users.
    pub fn number(&self) -> u32 {
        page_number(self.index)
    }

    /// Extract the page's plain text.
    ///
    /// Pages without text (scanned images, blank pages) yield an empty
    /// string rather than an error.
    pub fn extract_text(&self) -> Result<String> {
        let number = self.number();
        log::debug!("Extracting text from page {}", number);
        self.doc
            .doc
            .extract_text(&[number])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", number, e)))
    }
}

fn page_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
