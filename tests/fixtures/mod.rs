//! Test fixtures and sample data for import tests.
//!
//! Builders for vCard and CSV payloads so tests can state only the lines
//! they care about.

/// Wrap property lines in a `BEGIN:VCARD` / `END:VCARD` block using CRLF.
pub fn vcard(lines: &[&str]) -> String {
    let mut card = String::from("BEGIN:VCARD\r\nVERSION:3.0\r\n");
    for line in lines {
        card.push_str(line);
        card.push_str("\r\n");
    }
    card.push_str("END:VCARD\r\n");
    card
}

/// A card with a formatted name and one `TEL` line per phone.
pub fn vcard_with(name: &str, phones: &[&str]) -> String {
    let fn_line = format!("FN:{}", name);
    let tel_lines: Vec<String> = phones
        .iter()
        .map(|p| format!("TEL;TYPE=CELL:{}", p))
        .collect();

    let mut lines = vec![fn_line.as_str()];
    lines.extend(tel_lines.iter().map(String::as_str));
    vcard(&lines)
}

/// A CSV payload with the standard header and the given rows.
pub fn csv_file(rows: &[&str]) -> Vec<u8> {
    let mut csv = String::from("Name,Phone Numbers\n");
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv.into_bytes()
}

/// A realistic multi-card export, as produced by a phone's contacts app.
#[allow(dead_code)]
pub const PHONE_EXPORT: &str = "BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Rahman;Ayesha;;;\r\n\
FN:Ayesha Rahman\r\n\
TEL;CELL:+8801711000001\r\n\
TEL;HOME:+8801711000001\r\n\
TEL;WORK:02-9550000\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Hossain;Karim;;;\r\n\
TEL;CELL:01811000002\r\n\
PHOTO;VALUE=URL:http://example.com/karim.jpg\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Office Reception\r\n\
EMAIL;TYPE=INTERNET:reception@example.com\r\n\
END:VCARD\r\n";
