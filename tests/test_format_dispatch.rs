//! Integration tests for format dispatch.

mod fixtures;

use fixtures::*;
use std::io::Cursor;
use vcf_contacts::import::{import_named, ImportEngine, ImportFormat};

#[test]
fn test_uppercase_extension_routes_to_vcf() {
    let payload = vcard_with("Upper Case", &["42"]);

    let lower = import_named("contacts.vcf", Cursor::new(payload.clone())).unwrap();
    let upper = import_named("contacts.VCF", Cursor::new(payload)).unwrap();

    assert_eq!(lower.len(), 1);
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].name(), lower[0].name());
    assert_eq!(upper[0].phone_numbers(), lower[0].phone_numbers());
}

#[test]
fn test_csv_suffix_routes_to_csv() {
    let contacts = import_named("export.CSV", Cursor::new(csv_file(&["Ann,1"]))).unwrap();
    assert_eq!(contacts.len(), 1);
}

#[test]
fn test_unknown_suffix_is_empty_not_error() {
    let payload = vcard_with("Hidden", &["1"]);
    for name in ["contacts.txt", "contacts", "contacts.vcf.bak"] {
        let contacts = import_named(name, Cursor::new(payload.clone())).unwrap();
        assert!(contacts.is_empty(), "{} should not be importable", name);
    }
}

#[test]
fn test_wrong_reader_for_content_yields_empty() {
    // A vCard routed to the CSV reader has no usable name/phone rows
    let payload = vcard_with("Mismatch", &["1"]);
    let contacts = ImportEngine::new()
        .import(ImportFormat::Csv, Cursor::new(payload))
        .unwrap();
    assert!(contacts.is_empty());
}
