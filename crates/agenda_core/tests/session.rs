use agenda_core::{
    validate_entries, AgendaSession, DragGesture, EntryId, IdSource, IdStrategy, ReorderError,
    MAX_ENTRIES,
};

struct AlwaysSame(&'static str);

impl IdSource for AlwaysSame {
    fn next_id(&mut self) -> EntryId {
        EntryId::from(self.0)
    }
}

fn texts(session: &AgendaSession) -> Vec<&str> {
    session
        .entries()
        .iter()
        .map(|entry| entry.text.as_str())
        .collect()
}

#[test]
fn add_reports_created_id_and_appends() {
    let mut session = AgendaSession::new();
    let report = session.add("Buy milk");

    assert!(!report.limit_reached);
    let id = report.id.expect("add should return created id");
    assert_eq!(session.entries()[0].id, id);
    assert_eq!(texts(&session), vec!["Buy milk"]);
}

#[test]
fn blank_add_reports_nothing() {
    let mut session = AgendaSession::new();
    let report = session.add("   ");
    assert_eq!(report.id, None);
    assert!(!report.limit_reached);
    assert!(session.is_empty());
}

#[test]
fn session_caps_at_max_entries() {
    let mut session = AgendaSession::with_id_source(IdStrategy::Uuid.build());
    for i in 1..=MAX_ENTRIES {
        assert!(!session.add(&format!("Item {i}")).limit_reached);
    }
    assert!(session.is_full());

    let report = session.add("Item 11");
    assert!(report.limit_reached);
    assert_eq!(report.id, None);
    assert_eq!(session.len(), MAX_ENTRIES);
    validate_entries(session.entries()).unwrap();
}

#[test]
fn delete_frees_capacity() {
    let mut session = AgendaSession::new();
    for i in 0..MAX_ENTRIES {
        session.add(&format!("Item {i}"));
    }
    let first = session.entries()[0].id.clone();

    assert!(session.delete(&first));
    assert!(!session.delete(&first));
    assert!(!session.is_full());
    assert!(!session.add("late").limit_reached);
}

#[test]
fn update_and_delete_unknown_ids_are_noops() {
    let mut session = AgendaSession::new();
    session.add("A");
    let missing = EntryId::from("missing");

    assert!(!session.update(&missing, "B"));
    assert!(!session.delete(&missing));
    assert_eq!(texts(&session), vec!["A"]);
}

#[test]
fn update_ignores_blank_text() {
    let mut session = AgendaSession::new();
    let id = session.add("keep").id.unwrap();
    assert!(!session.update(&id, " "));
    assert_eq!(texts(&session), vec!["keep"]);
}

#[test]
fn drag_gesture_drives_reorder() {
    let mut session = AgendaSession::new();
    for text in ["A", "B", "C"] {
        session.add(text);
    }

    let mut gesture = DragGesture::new();
    gesture.start(2);
    let (source, dest) = gesture.drop_on(0).expect("drop on another row reorders");
    session.reorder(source, dest).unwrap();
    assert_eq!(texts(&session), vec!["C", "A", "B"]);
}

#[test]
fn failed_reorder_leaves_list_untouched() {
    let mut session = AgendaSession::new();
    session.add("A");
    session.add("B");

    let err = session.reorder(0, 2).unwrap_err();
    assert_eq!(err, ReorderError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(texts(&session), vec!["A", "B"]);
}

#[test]
fn add_returns_when_id_source_keeps_repeating() {
    let mut session = AgendaSession::with_id_source(Box::new(AlwaysSame("dup")));
    let first = session.add("A");
    assert_eq!(first.id, Some(EntryId::from("dup")));

    let second = session.add("B");
    assert_eq!(second.id, None);
    assert!(!second.limit_reached);
    assert_eq!(texts(&session), vec!["A"]);
    validate_entries(session.entries()).unwrap();
}
