//! vCard (VCF) reader.
//!
//! Lenient, line-oriented extraction: each `BEGIN:VCARD` / `END:VCARD` block
//! is unfolded and scanned for a display name, phone numbers, a remote photo
//! and an email address. A block that cannot produce a contact is logged and
//! skipped without affecting the others.

use super::record::{ContactDraft, RecordError};
use crate::domain::EmailAddress;
use crate::models::Contact;
use tracing::debug;

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

/// Folded continuation sequences, longest first so CRLF wins over a lone CR or LF.
const FOLDS: [&str; 6] = ["\r\n ", "\r\n\t", "\n ", "\n\t", "\r ", "\r\t"];

/// Parse every vCard entry in `content`, in file order.
pub fn parse_vcf(content: &str) -> Vec<Contact> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let mut contacts = Vec::new();
    let mut skipped = 0usize;

    for (index, block) in card_blocks(content).enumerate() {
        match parse_card(block) {
            Ok(contact) => contacts.push(contact),
            Err(e) => {
                skipped += 1;
                debug!(card = index, error = %e, "Skipping vCard entry");
            }
        }
    }

    debug!(
        parsed = contacts.len(),
        skipped = skipped,
        "vCard parsing finished"
    );
    contacts
}

/// Everything between one `BEGIN:VCARD` and the next, for chunks that contain
/// an `END:VCARD`. Lines after the end marker still belong to the card.
fn card_blocks(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(BEGIN_MARKER)
        .filter(|chunk| chunk.contains(END_MARKER))
}

/// Join continuation lines back onto the logical line they belong to.
fn unfold(block: &str) -> String {
    FOLDS
        .iter()
        .fold(block.to_string(), |text, fold| text.replace(fold, ""))
}

fn parse_card(block: &str) -> Result<Contact, RecordError> {
    let unfolded = unfold(block);
    // CRLF, LF and bare CR all end a line
    let lines: Vec<&str> = unfolded.split(['\r', '\n']).collect();

    let mut draft = ContactDraft::new();

    if let Some(formatted) = lines.iter().find_map(|l| l.strip_prefix("FN:")) {
        draft.set_name(formatted);
    }
    if !draft.has_name() {
        if let Some(structured) = lines.iter().find_map(|l| l.strip_prefix("N:")) {
            draft.set_name(&structured_name(structured));
        }
    }

    for line in lines.iter().filter(|l| l.contains("TEL")) {
        draft.push_phone(value_after_last_colon(line));
    }

    if let Some(photo) = lines
        .iter()
        .find(|l| l.starts_with("PHOTO") && l.to_ascii_lowercase().contains("http"))
    {
        draft.set_photo_uri(photo.split_once(':').map_or(*photo, |(_, uri)| uri));
    }

    if let Some(email) = lines
        .iter()
        .filter(|l| is_email_property(l))
        .find_map(|l| EmailAddress::parse_optional(value_after_last_colon(l)))
    {
        draft.set_email(email);
    }

    draft.finish()
}

/// `N:` components are `family;given;additional;prefix;suffix`.
fn structured_name(value: &str) -> String {
    let mut parts = value.split(';').map(str::trim);
    let family = parts.next().unwrap_or_default();
    let given = parts.next().unwrap_or_default();
    format!("{} {}", given, family).trim().to_string()
}

/// Text after the last colon, or the whole line when there is none.
fn value_after_last_colon(line: &str) -> &str {
    line.rsplit_once(':').map_or(line, |(_, value)| value).trim()
}

/// Matches `EMAIL:`, `EMAIL;TYPE=work:` and grouped `item1.EMAIL:` properties.
fn is_email_property(line: &str) -> bool {
    let name_end = line.find([';', ':']).unwrap_or(line.len());
    line[..name_end].to_ascii_uppercase().ends_with("EMAIL")
}
