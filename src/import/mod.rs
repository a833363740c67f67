//! Contact import engine.
//!
//! Converts the raw bytes of a VCF or CSV file into canonical [`Contact`]
//! records. The engine is a pure transform: it holds no state, performs no
//! I/O of its own beyond draining the reader it is handed, and never fails
//! because a file contained nothing importable.

mod csv_reader;
mod record;
pub mod text;
mod vcf_reader;

pub use csv_reader::parse_csv;
pub use vcf_reader::parse_vcf;

use crate::error::ImportResult;
use crate::models::Contact;
use std::fmt;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, info};

/// Supported import formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportFormat {
    /// vCard 2.1 / 3.0 / 4.0 text
    Vcf,
    /// Comma-separated `name,phones` rows
    Csv,
}

impl ImportFormat {
    /// Select a format by case-insensitive file suffix.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.trim().to_ascii_lowercase();
        if lower.ends_with(".vcf") {
            Some(Self::Vcf)
        } else if lower.ends_with(".csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }

    /// Select a format from a declared MIME type, ignoring parameters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "text/vcard" | "text/x-vcard" | "text/directory" => Some(Self::Vcf),
            "text/csv" | "text/comma-separated-values" | "application/csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Vcf => "vcf",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "vcf" | "vcard" => Ok(Self::Vcf),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unsupported import format: {}", other)),
        }
    }
}

/// Parse already-read file contents.
pub fn import_bytes(format: ImportFormat, bytes: &[u8]) -> Vec<Contact> {
    match format {
        ImportFormat::Vcf => parse_vcf(&text::decode_text(bytes)),
        ImportFormat::Csv => parse_csv(bytes),
    }
}

/// Drain `reader` and parse its contents.
///
/// # Errors
///
/// Returns `ImportError::Io` if the stream cannot be read. Malformed or
/// empty content is not an error.
pub fn import_reader<R: Read>(format: ImportFormat, mut reader: R) -> ImportResult<Vec<Contact>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let contacts = import_bytes(format, &bytes);
    info!(
        format = %format,
        bytes = bytes.len(),
        contacts = contacts.len(),
        "Import finished"
    );
    Ok(contacts)
}

/// Dispatch on the file name's suffix and import.
///
/// Unsupported suffixes yield an empty list without touching the reader.
pub fn import_named<R: Read>(file_name: &str, reader: R) -> ImportResult<Vec<Contact>> {
    match ImportFormat::from_file_name(file_name) {
        Some(format) => import_reader(format, reader),
        None => {
            debug!(file_name = %file_name, "Unsupported import file type");
            Ok(Vec::new())
        }
    }
}

/// Stateless handle over the import functions, for callers that inject services.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportEngine;

impl ImportEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, format: ImportFormat, bytes: &[u8]) -> Vec<Contact> {
        import_bytes(format, bytes)
    }

    pub fn import<R: Read>(&self, format: ImportFormat, reader: R) -> ImportResult<Vec<Contact>> {
        import_reader(format, reader)
    }

    pub fn import_named<R: Read>(&self, file_name: &str, reader: R) -> ImportResult<Vec<Contact>> {
        import_named(file_name, reader)
    }
}
