//! Knobs for worksheet PDF output

use super::document::PdfVersion;
use serde::{Deserialize, Serialize};

/// Metadata and encoding choices for one exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportOptions {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Joined with ", " in the info dictionary
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Whether to Flate-compress content streams
    #[serde(default = "default_compress")]
    pub compress: bool,
    /// Whether to stamp the creation date into the info dictionary
    #[serde(default = "default_include_creation_date")]
    pub include_creation_date: bool,
    /// Header version; the object syntax is the same for all of them
    #[serde(default)]
    pub pdf_version: PdfVersion,
}

fn default_compress() -> bool {
    true
}

fn default_include_creation_date() -> bool {
    true
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: Vec::new(),
            compress: default_compress(),
            include_creation_date: default_include_creation_date(),
            pdf_version: PdfVersion::default(),
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Leave out the creation date so identical input gives identical bytes
    pub fn without_creation_date(mut self) -> Self {
        self.include_creation_date = false;
        self
    }

    pub fn with_pdf_version(mut self, version: PdfVersion) -> Self {
        self.pdf_version = version;
        self
    }
}
