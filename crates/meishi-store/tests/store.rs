//! Integration tests for the card store: directory loading, creation,
//! renaming, and summaries against real files in scratch directories.

use std::path::Path;

use meishi_core::error::ErrorCode;
use meishi_store::{
    StoreError, create_card, load_all_cards, load_card, read_card_file, rename_contact, summarize,
    write_card_file,
};

fn write(path: &Path, content: &str) {
    write_card_file(path, content).expect("test fixture write should succeed");
}

#[test_log::test]
fn create_then_load_directory_finds_the_card() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("new.vcf");

    create_card(&path, "Jane Doe").expect("create should succeed");
    assert!(path.exists());

    let outcomes = load_all_cards(dir.path()).expect("scan should succeed");
    assert_eq!(outcomes.len(), 1);

    let stored = outcomes[0].result.as_ref().expect("card should load");
    assert_eq!(stored.card().formatted_name(), Some("Jane Doe"));
    assert_eq!(summarize(stored).display_name, "Jane Doe");
}

#[test_log::test]
fn create_refuses_existing_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dup.vcf");

    create_card(&path, "First").expect("first create");
    let err = create_card(&path, "Second").unwrap_err();

    assert!(matches!(err, StoreError::DuplicatePath(_)));
    assert_eq!(err.code(), ErrorCode::DuplicatePath);

    // The original file is untouched.
    let stored = load_card(&path).expect("load");
    assert_eq!(stored.card().formatted_name(), Some("First"));
}

#[test_log::test]
fn one_bad_file_never_aborts_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        &dir.path().join("good.vcf"),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Good\r\nEND:VCARD\r\n",
    );
    // Missing colon on a non-blank line.
    write(
        &dir.path().join("bad.vcf"),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN Good\r\nEND:VCARD\r\n",
    );
    // Not a card file at all; must not even be scanned.
    write(&dir.path().join("notes.txt"), "not a card");

    let outcomes = load_all_cards(dir.path()).expect("scan should succeed");
    assert_eq!(outcomes.len(), 2);

    // Sorted by file name: bad.vcf first.
    let bad = &outcomes[0];
    assert!(bad.path.ends_with("bad.vcf"));
    let err = bad.result.as_ref().unwrap_err();
    assert_eq!(err.code(), ErrorCode::PropertyFormat);

    let good = &outcomes[1];
    let stored = good.result.as_ref().expect("good card should load");
    assert_eq!(stored.card().formatted_name(), Some("Good"));
}

#[test_log::test]
fn rename_preserves_other_properties_and_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.vcf");
    write(
        &path,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Old\r\nBDAY:19900101\r\nX-NOTE:hi\r\nEND:VCARD\r\n",
    );

    let mut stored = load_card(&path).expect("load");
    rename_contact(&mut stored, "New").expect("rename");

    assert_eq!(stored.card().formatted_name(), Some("New"));

    let text = read_card_file(&path).expect("read back");
    assert_eq!(
        text,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:New\r\nBDAY:19900101\r\nX-NOTE:hi\r\nEND:VCARD\r\n"
    );

    // Reloading sees exactly what memory holds.
    assert_eq!(load_card(&path).expect("reload"), stored);
}

#[test_log::test]
fn rename_failure_leaves_prior_file_intact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.vcf");
    let mut stored = create_card(&path, "Keep Me").expect("create");
    let before = read_card_file(&path).expect("read");

    let err = rename_contact(&mut stored, "").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);

    assert_eq!(read_card_file(&path).expect("read"), before);
    assert_eq!(stored.card().formatted_name(), Some("Keep Me"));
}

#[test_log::test]
fn load_card_validates_semantics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad-date.vcf");
    write(
        &path,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:X\r\nBDAY:19901332\r\nEND:VCARD\r\n",
    );

    let err = load_card(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test_log::test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_card(&dir.path().join("absent.vcf")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test_log::test]
fn summary_decodes_dates_and_counts_other_properties() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("full.vcf");
    write(
        &path,
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nBDAY:19900615\r\n\
         ANNIVERSARY:20100410T120000Z\r\nEMAIL:j@example.com\r\nNOTE:hello\r\nEND:VCARD\r\n",
    );

    let stored = load_card(&path).expect("load");
    let summary = summarize(&stored);

    assert_eq!(summary.file_name, "full.vcf");
    assert_eq!(summary.display_name, "John Doe");
    assert_eq!(summary.birthday.as_deref(), Some("1990-06-15"));
    assert_eq!(
        summary.anniversary.as_deref(),
        Some("2010-04-10 12:00:00 (UTC)")
    );
    assert_eq!(summary.other_property_count, 2);
}

#[test_log::test]
fn empty_directory_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcomes = load_all_cards(dir.path()).expect("scan");
    assert!(outcomes.is_empty());
}

#[test_log::test]
fn unreadable_directory_is_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_all_cards(&dir.path().join("no-such-dir")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Io);
}
