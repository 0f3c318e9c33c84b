//! Store operations composed with file import and export.

mod fixtures;

use contact_book::{Contact, ContactStore, StoreError};
use fixtures::*;
use std::fs;

#[test]
fn test_import_csv_documented_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, JUAN_CSV).unwrap();

    let mut store = ContactStore::new();
    assert_eq!(store.import_csv(&path).unwrap(), 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("Juan Perez").unwrap().phone, "1122334455");
}

#[test]
fn test_import_csv_missing_file_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = sample_store();
    let result = store.import_csv(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(StoreError::Io { .. })));
    assert_eq!(store.len(), 3);
}

#[test]
fn test_import_csv_malformed_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Last name,First name,Mobile\nPerez,Juan,1122334455\n").unwrap();

    let mut store = sample_store();
    let before = store.export_csv_string();
    assert!(matches!(
        store.import_csv(&path),
        Err(StoreError::MalformedSchema { .. })
    ));
    assert_eq!(store.export_csv_string(), before);
}

#[test]
fn test_import_vcard_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = sample_store();
    assert_eq!(store.import_vcard(dir.path().join("missing.vcf")).unwrap(), 0);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_bulk_import_overwrites_but_add_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.vcf");
    fs::write(&path, JUAN_VCARD).unwrap();

    let mut store = ContactStore::new();
    let typed = Contact::new("Perez", "Juan", "0000000000", "typed@example.com");
    assert!(store.add(typed.clone()));

    // Interactive add refuses a second Juan Perez.
    assert!(!store.add(Contact::new("Perez", "Juan", "1111111111", "x@example.com")));
    assert_eq!(store.get("Juan Perez"), Some(&typed));

    // Bulk import replaces him.
    assert_eq!(store.import_vcard(&path).unwrap(), 1);
    assert_eq!(store.get("Juan Perez").unwrap().email, "juan@example.com");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_export_empty_store_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let store = ContactStore::new();
    assert_eq!(store.export_csv(&path).unwrap(), 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Last name,First name,Mobile,Email\r\n"
    );
}

#[test]
fn test_csv_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.csv");

    let store = sample_store();
    assert_eq!(store.export_csv(&path).unwrap(), 3);

    let mut reloaded = ContactStore::new();
    assert_eq!(reloaded.import_csv(&path).unwrap(), 3);
    let original: Vec<&Contact> = store.iter().collect();
    let copy: Vec<&Contact> = reloaded.iter().collect();
    assert_eq!(original, copy);
}

#[test]
fn test_vcard_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.vcf");

    let store = sample_store();
    assert_eq!(store.export_vcard(&path).unwrap(), 3);

    let mut reloaded = ContactStore::new();
    assert_eq!(reloaded.import_vcard(&path).unwrap(), 3);
    for contact in &store {
        assert_eq!(reloaded.get(&contact.display_name()), Some(contact));
    }
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.vcf");
    let store = sample_store();
    assert!(matches!(store.export_vcard(&path), Err(StoreError::Io { .. })));
    assert!(matches!(store.export_csv(&path), Err(StoreError::Io { .. })));
}

#[test]
fn test_search_properties() {
    let store = sample_store();

    assert_eq!(store.search("").len(), store.len());

    for contact in store.iter() {
        let by_phone = store.search(&contact.phone[3..7]);
        assert!(by_phone.contains(&contact), "phone search for {}", contact);
    }

    assert_eq!(store.search("Gomez").len(), 1);
    assert!(store.search("GOMEZ").is_empty());
    assert_eq!(store.search("Perez 1122").len(), 1);
}

#[test]
fn test_lookup_missing_is_none() {
    let store = sample_store();
    assert!(store.get("Nobody Here").is_none());
    assert!(store.get("").is_none());
}
