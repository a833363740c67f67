//! CSV reader.
//!
//! Rows are positional: column 0 is the name, column 1 holds one or more
//! phone numbers separated by `;`. The first row is always a header.

use super::record::{ContactDraft, RecordError};
use super::text::decode_text;
use crate::models::Contact;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

const NAME_COLUMN: usize = 0;
const PHONES_COLUMN: usize = 1;
const PHONE_SEPARATOR: char = ';';

/// Parse a CSV export, skipping the header and any unusable rows.
pub fn parse_csv(bytes: &[u8]) -> Vec<Contact> {
    let text = decode_text(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut contacts = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let line = index + 2;
        match row.map_err(RecordError::from).and_then(|r| contact_from_row(&r)) {
            Ok(contact) => contacts.push(contact),
            Err(e) => {
                skipped += 1;
                debug!(row = line, error = %e, "Skipping CSV row");
            }
        }
    }

    debug!(
        parsed = contacts.len(),
        skipped = skipped,
        "CSV parsing finished"
    );
    contacts
}

fn contact_from_row(row: &StringRecord) -> Result<Contact, RecordError> {
    let mut draft = ContactDraft::new();

    if let Some(name) = row.get(NAME_COLUMN) {
        draft.set_name(name);
    }

    if let Some(phones) = row.get(PHONES_COLUMN) {
        for phone in phones.split(PHONE_SEPARATOR) {
            draft.push_phone(phone);
        }
    }

    draft.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_row_with_two_phones() {
        let csv = b"name,phones\n\"Jane Smith\",\"+1555000111;+1555000222\"\n";
        let contacts = parse_csv(csv);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name(), "Jane Smith");
        assert_eq!(contacts[0].phone_numbers(), ["+1555000111", "+1555000222"]);
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(parse_csv(b"name,phones\n").is_empty());
        assert!(parse_csv(b"").is_empty());
    }

    #[test]
    fn test_first_row_is_always_header() {
        let csv = b"Real Person,111\nOther Person,222\n";
        let contacts = parse_csv(csv);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name(), "Other Person");
    }

    #[test]
    fn test_unusable_rows_are_skipped() {
        let csv = b"name,phones\n,123\nNo Phone\nBlank Phones, ; ;\n  Kept  , 9 ;8;9 ,extra,columns\n";
        let contacts = parse_csv(csv);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name(), "Kept");
        assert_eq!(contacts[0].phone_numbers(), ["9", "8"]);
    }

    #[test]
    fn test_csv_never_sets_photo_or_email() {
        let contacts = parse_csv(b"name,phones,email\nAnn,1,ann@example.com\n");
        assert!(contacts[0].email().is_none());
        assert!(contacts[0].photo_uri().is_none());
    }
}
