use agenda_core::{validate_entries, Entry, EntryId, EntryValidationError, MAX_ENTRIES};

#[test]
fn new_rejects_blank_text() {
    let err = Entry::new("1", " \t ").unwrap_err();
    assert_eq!(err, EntryValidationError::BlankText);
    assert_eq!(err.to_string(), "entry text must not be blank");
}

#[test]
fn serialization_uses_flat_wire_fields() {
    let entry = Entry::new("42", "Buy milk").unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "42", "text": "Buy milk" }));

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn deserialize_rejects_blank_text() {
    let value = serde_json::json!({ "id": "1", "text": "   " });
    let err = serde_json::from_value::<Entry>(value).unwrap_err();
    assert!(
        err.to_string().contains("entry text must not be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn validate_entries_accepts_well_formed_list() {
    let list = vec![Entry::new("1", "A").unwrap(), Entry::new("2", "B").unwrap()];
    validate_entries(&list).unwrap();
    validate_entries(&[]).unwrap();
}

#[test]
fn validate_entries_rejects_duplicate_ids() {
    let list = vec![Entry::new("1", "A").unwrap(), Entry::new("1", "B").unwrap()];
    let err = validate_entries(&list).unwrap_err();
    assert_eq!(err, EntryValidationError::DuplicateId(EntryId::from("1")));
}

#[test]
fn validate_entries_rejects_over_capacity() {
    let list = (0..=MAX_ENTRIES)
        .map(|i| Entry::new(i.to_string(), "x").unwrap())
        .collect::<Vec<_>>();
    let err = validate_entries(&list).unwrap_err();
    assert_eq!(
        err,
        EntryValidationError::TooManyEntries {
            len: MAX_ENTRIES + 1,
            max: MAX_ENTRIES,
        }
    );
}

#[test]
fn validate_entries_catches_fields_mutated_after_construction() {
    let mut entry = Entry::new("1", "A").unwrap();
    entry.text = String::new();
    assert_eq!(
        validate_entries(&[entry]).unwrap_err(),
        EntryValidationError::BlankText
    );
}
