//! PDF Document Structure
//!
//! Catalog, page tree, page objects and the document information dictionary.

use super::objects::{ObjectId, PdfDictionary, PdfObject};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// PDF version written in the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PdfVersion {
    #[default]
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    V1_5,
    #[serde(rename = "1.7")]
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_5 => "1.5",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// Document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Local>>,
}

impl DocumentInfo {
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        let text_entries = [
            ("Title", self.title.as_deref()),
            ("Author", self.author.as_deref()),
            ("Subject", self.subject.as_deref()),
            ("Creator", self.creator.as_deref()),
            ("Producer", self.producer.as_deref()),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                dict.set(key, PdfObject::String(super::fonts::encode_win_ansi(value)));
            }
        }
        if !self.keywords.is_empty() {
            dict.set(
                "Keywords",
                PdfObject::String(super::fonts::encode_win_ansi(&self.keywords.join(", "))),
            );
        }
        if let Some(date) = &self.creation_date {
            dict.set("CreationDate", PdfObject::text(&pdf_date(date)));
        }
        dict
    }
}

/// Format a timestamp as a PDF date string (`D:YYYYMMDDHHmmSS+HH'mm'`)
pub fn pdf_date(date: &DateTime<Local>) -> String {
    let offset = date.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.abs();
    format!(
        "D:{}{}{:02}'{:02}'",
        date.format("%Y%m%d%H%M%S"),
        sign,
        offset / 3600,
        (offset % 3600) / 60
    )
}

/// Page media box in points, origin at the lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_array(&self) -> PdfObject {
        PdfObject::reals(&[0.0, 0.0, self.width, self.height])
    }
}

/// Document catalog pointing at the page tree root
pub fn catalog(pages: ObjectId) -> PdfDictionary {
    PdfDictionary::typed("Catalog").with("Pages", pages)
}

/// Page tree root listing every page in order
pub fn page_tree(kids: &[ObjectId]) -> PdfDictionary {
    let kids: Vec<PdfObject> = kids.iter().copied().map(PdfObject::from).collect();
    let count = kids.len();
    PdfDictionary::typed("Pages")
        .with("Kids", kids)
        .with("Count", count)
}

/// A leaf page object
pub fn page(parent: ObjectId, media_box: MediaBox, fonts: PdfDictionary, contents: ObjectId) -> PdfDictionary {
    let mut resources = PdfDictionary::new().with(
        "ProcSet",
        vec![PdfObject::name("PDF"), PdfObject::name("Text")],
    );
    if !fonts.is_empty() {
        resources.set("Font", fonts);
    }

    PdfDictionary::typed("Page")
        .with("Parent", parent)
        .with("MediaBox", media_box.to_array())
        .with("Resources", resources)
        .with("Contents", contents)
}
