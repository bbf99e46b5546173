//! Document information (version, page count, Info dictionary).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Object};
use serde::{Deserialize, Serialize};

use crate::document::PdfDocument;
use crate::error::{Error, Result};

/// Summary of a PDF document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Source file, when the document was opened from a path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// PDF version (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages
    pub page_count: usize,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    /// Collect information from an opened document.
    pub fn from_document(doc: &PdfDocument, file: Option<&Path>) -> Self {
        let mut info = Self {
            file: file.map(Path::to_path_buf),
            pdf_version: doc.version().to_string(),
            page_count: doc.page_count(),
            ..Default::default()
        };

        if let Some(dict) = info_dictionary(doc) {
            info.title = get_string_from_dict(dict, b"Title");
            info.author = get_string_from_dict(dict, b"Author");
            info.subject = get_string_from_dict(dict, b"Subject");
            info.keywords = get_string_from_dict(dict, b"Keywords");
            info.creator = get_string_from_dict(dict, b"Creator");
            info.producer = get_string_from_dict(dict, b"Producer");

            if let Some(date_str) = get_string_from_dict(dict, b"CreationDate") {
                info.created = parse_pdf_date(&date_str);
            }
            if let Some(date_str) = get_string_from_dict(dict, b"ModDate") {
                info.modified = parse_pdf_date(&date_str);
            }
        }

        info
    }

    /// Open a file and collect its information.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = PdfDocument::open(path)?;
        Ok(Self::from_document(&doc, Some(path)))
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| Error::Other(format!("JSON serialization failed: {e}")))
    }
}

fn info_dictionary(doc: &PdfDocument) -> Option<&Dictionary> {
    let raw = doc.raw_doc();
    match raw.trailer.get(b"Info").ok()? {
        Object::Reference(id) => raw.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Read a text string entry, honouring the UTF-16BE byte order mark.
fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1 fallback
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
///
/// The timezone suffix is ignored and the time is taken as UTC.
fn parse_pdf_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    if s.len() < 4 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6).and_then(|m| m.parse().ok()).unwrap_or(1);
    let day: u32 = s.get(6..8).and_then(|d| d.parse().ok()).unwrap_or(1);
    let hour: u32 = s.get(8..10).and_then(|h| h.parse().ok()).unwrap_or(0);
    let minute: u32 = s.get(10..12).and_then(|m| m.parse().ok()).unwrap_or(0);
    let second: u32 = s.get(12..14).and_then(|s| s.parse().ok()).unwrap_or(0);

    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use lopdf::StringFormat;

    #[test]
    fn test_parse_pdf_date() {
        let date = parse_pdf_date("D:20240115103045+09'00'").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
        assert_eq!(date.hour(), 10);
        assert_eq!(date.second(), 45);
    }

    #[test]
    fn test_parse_pdf_date_minimal() {
        let date = parse_pdf_date("D:2024").unwrap();
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_parse_pdf_date_invalid() {
        assert!(parse_pdf_date("D:20").is_none());
        assert!(parse_pdf_date("D:20241345").is_none());
        assert!(parse_pdf_date("yesterday").is_none());
    }

    #[test]
    fn test_decode_text_string() {
        assert_eq!(decode_text_string(b"Report"), "Report");
        assert_eq!(decode_text_string(&[0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]), "Hi");
        assert_eq!(decode_text_string(&[0x43, 0x61, 0x66, 0xE9]), "Café");
    }

    #[test]
    fn test_get_string_from_dict() {
        let mut dict = Dictionary::new();
        dict.set(
            "Title",
            Object::String(b"Assignment".to_vec(), StringFormat::Literal),
        );
        dict.set("Producer", Object::Name(b"pdfTeX".to_vec()));
        dict.set("Count", Object::Integer(3));

        assert_eq!(
            get_string_from_dict(&dict, b"Title").as_deref(),
            Some("Assignment")
        );
        assert_eq!(
            get_string_from_dict(&dict, b"Producer").as_deref(),
            Some("pdfTeX")
        );
        assert_eq!(get_string_from_dict(&dict, b"Count"), None);
        assert_eq!(get_string_from_dict(&dict, b"Author"), None);
    }

    #[test]
    fn test_to_json_skips_missing_file() {
        let info = DocumentInfo {
            pdf_version: "1.5".to_string(),
            page_count: 2,
            ..Default::default()
        };
        let json = info.to_json(false).unwrap();
        assert!(json.contains("\"page_count\":2"));
        assert!(json.contains("\"pdf_version\":\"1.5\""));
        assert!(!json.contains("\"file\""));
    }
}
