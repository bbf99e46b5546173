//! Extraction options and page selection.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for extracting a PDF report.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Page selection (which pages to print)
    pub pages: PageSelection,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set page selection from a string such as `"1-3"` or `"2,4,6-8"`.
    pub fn with_page_spec(mut self, spec: &str) -> Result<Self> {
        self.pages = PageSelection::parse(spec)?;
        Ok(self)
    }
}

/// Page selection, using 1-based page numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// Inclusive range of page numbers
    Range(RangeInclusive<u32>),
    /// Explicit page numbers
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                let (start, end) = parse_bounds(s, start, end)?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let (start, end) = parse_bounds(part, start, end)?;
                pages.extend(start..=end);
            } else {
                pages.push(parse_page_number(part)?);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }

    /// Check that every selected page exists in a document of `count` pages.
    pub fn validate(&self, count: usize) -> Result<()> {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let highest = match self {
            PageSelection::All => return Ok(()),
            PageSelection::Range(range) => *range.end(),
            PageSelection::Pages(pages) => match pages.iter().max() {
                Some(&highest) => highest,
                None => return Ok(()),
            },
        };

        if highest > count {
            return Err(Error::PageOutOfRange(highest, count));
        }
        Ok(())
    }
}

fn parse_bounds(spec: &str, start: &str, end: &str) -> Result<(u32, u32)> {
    let start = parse_page_number(start)?;
    let end = parse_page_number(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!("{spec}: start is after end")));
    }
    Ok((start, end))
}

fn parse_page_number(s: &str) -> Result<u32> {
    let s = s.trim();
    match s.parse::<u32>() {
        Ok(0) => Err(Error::InvalidPageRange(
            "page numbers start at 1".to_string(),
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::InvalidPageRange(format!("'{s}' is not a page number"))),
    }
}
