//! PDF Font Handling
//!
//! Worksheets only use the standard Type1 faces every viewer ships with, so
//! nothing is embedded. Text is encoded with WinAnsiEncoding.

use super::objects::{ObjectId, PdfDictionary, PdfObject};

/// Standard Type1 faces used for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// Base font name as it appears in the font dictionary
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Pick a face for a family name; unknown families fall back to Helvetica
    pub fn for_family(family: &str, bold: bool) -> Self {
        let family = family.to_lowercase();
        let serif = family.contains("times") || (family.contains("serif") && !family.contains("sans"));
        let mono = family.contains("courier") || family.contains("mono");

        match (serif, mono, bold) {
            (true, _, false) => StandardFont::TimesRoman,
            (true, _, true) => StandardFont::TimesBold,
            (_, true, false) => StandardFont::Courier,
            (_, true, true) => StandardFont::CourierBold,
            (_, _, false) => StandardFont::Helvetica,
            (_, _, true) => StandardFont::HelveticaBold,
        }
    }

    /// Font dictionary for this face
    pub fn dictionary(&self) -> PdfDictionary {
        PdfDictionary::typed("Font")
            .with("Subtype", PdfObject::name("Type1"))
            .with("BaseFont", PdfObject::name(self.base_name()))
            .with("Encoding", PdfObject::name("WinAnsiEncoding"))
    }
}

/// Fonts used by a document, with their page resource names (`F1`, `F2`, ...)
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<StandardFont>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource name for `font`, registering it on first use
    pub fn resource_name(&mut self, font: StandardFont) -> String {
        let index = match self.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    /// Registered fonts with their resource names, in registration order
    pub fn fonts(&self) -> impl Iterator<Item = (String, StandardFont)> + '_ {
        self.fonts
            .iter()
            .enumerate()
            .map(|(i, font)| (format!("F{}", i + 1), *font))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// `/Font` resource dictionary mapping resource names to font objects
    pub fn resource_dictionary(&self, objects: &[ObjectId]) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        for ((name, _), id) in self.fonts().zip(objects) {
            dict.set(name, *id);
        }
        dict
    }
}

/// Encode text as WinAnsiEncoding bytes; unmappable characters become `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
