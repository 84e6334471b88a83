//! Behavioural tests for the checklist store through the public API.

use checklist::{ChecklistItem, ChecklistStore, ItemCounts, Notification, Section, Tab};

fn assert_sections_consistent(store: &ChecklistStore) {
    for item in store.items() {
        assert_eq!(
            item.section() == Section::Completed,
            item.is_completed,
            "section out of sync for {}",
            item.id
        );
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["section"] == "completed", value["isCompleted"] == true);
    }
}

/// Store with A (open, repeatable) and B (completed, non-repeatable)
fn scenario_store() -> ChecklistStore {
    ChecklistStore::from_items(vec![
        ChecklistItem::new("A", "Water plants", 1).repeatable(true),
        ChecklistItem::new("B", "Book flights", 2).completed(true),
    ])
    .unwrap()
}

#[test]
fn sections_stay_consistent_across_operation_sequences() {
    let mut store = scenario_store();
    let c = store.add("Check passport", Some("6+ months"), true).unwrap();
    assert_sections_consistent(&store);

    let steps: Vec<Box<dyn Fn(&mut ChecklistStore)>> = vec![
        Box::new(|s: &mut ChecklistStore| {
            s.toggle_completed("A");
        }),
        Box::new(|s: &mut ChecklistStore| s.complete_all()),
        Box::new(|s: &mut ChecklistStore| s.refresh_repeatables()),
        Box::new(move |s: &mut ChecklistStore| {
            s.toggle_repeatable(&c);
        }),
        Box::new(|s: &mut ChecklistStore| {
            s.edit("B", "Book return flights", None, true);
        }),
        Box::new(|s: &mut ChecklistStore| s.refresh_repeatables()),
        Box::new(|s: &mut ChecklistStore| {
            s.delete("A");
        }),
        Box::new(|s: &mut ChecklistStore| {
            s.toggle_completed("B");
        }),
    ];

    for step in &steps {
        step(&mut store);
        assert_sections_consistent(&store);
        let counts = store.counts();
        assert_eq!(counts.open + counts.completed, store.len());
    }
}

#[test]
fn blank_add_never_changes_length() {
    let mut store = scenario_store();
    for blank in ["", " ", "\t\n", "   "] {
        assert!(store.add(blank, Some("desc"), false).is_none());
        assert_eq!(store.len(), 2);
    }
}

#[test]
fn blank_edit_never_changes_content() {
    let mut store = scenario_store();
    for blank in ["", "  ", "\n"] {
        store.edit("A", blank, Some("changed"), false);
        let item = store.get("A").unwrap();
        assert_eq!(item.content, "Water plants");
        assert!(item.is_repeatable);
        assert_eq!(item.description, None);
    }
}

#[test]
fn double_toggle_restores_state() {
    let mut store = scenario_store();
    for id in ["A", "B"] {
        let before = store.get(id).unwrap().clone();
        store.toggle_completed(id);
        store.toggle_completed(id);
        let after = store.get(id).unwrap();
        assert_eq!(after.is_completed, before.is_completed);
        assert_eq!(after.section(), before.section());
    }
}

#[test]
fn complete_all_leaves_nothing_open() {
    let mut store = scenario_store();
    store.add("Extra", None, false);
    store.complete_all();
    assert_eq!(store.counts().open, 0);
    assert!(store.filter(Tab::Open).is_empty());
}

#[test]
fn refresh_ignores_non_repeatable_items() {
    let mut store = scenario_store();
    let open_plain = store.add("Plain open", None, false).unwrap();

    let before: Vec<(String, bool)> = store
        .items()
        .iter()
        .filter(|i| !i.is_repeatable)
        .map(|i| (i.id.clone(), i.is_completed))
        .collect();

    store.refresh_repeatables();

    for (id, was_completed) in before {
        assert_eq!(store.get(&id).unwrap().is_completed, was_completed);
    }
    assert!(!store.get(&open_plain).unwrap().is_completed);
}

#[test]
fn deleted_id_operations_are_noops() {
    let mut store = scenario_store();
    assert!(store.delete("B"));
    store.take_notifications();

    assert!(!store.delete("B"));
    assert!(!store.toggle_completed("B"));
    assert!(!store.toggle_repeatable("B"));
    assert!(!store.edit("B", "Revived", None, false));

    assert_eq!(store.len(), 1);
    assert!(store.take_notifications().is_empty());
}

#[test]
fn refresh_complete_refresh_scenario() {
    let mut store = scenario_store();

    store.refresh_repeatables();
    assert_eq!(store.get("A").unwrap().section(), Section::Open);
    assert_eq!(store.get("B").unwrap().section(), Section::Completed);

    store.complete_all();
    assert_eq!(store.counts(), ItemCounts { open: 0, completed: 2 });

    store.refresh_repeatables();
    assert_eq!(store.get("A").unwrap().section(), Section::Open);
    assert_eq!(store.get("B").unwrap().section(), Section::Completed);
}

#[test]
fn add_scenario() {
    let mut store = ChecklistStore::new();

    store.add("", Some("desc"), false);
    assert!(store.is_empty());
    assert!(store.take_notifications().is_empty());

    store.add("Buy milk", None, true);
    assert_eq!(store.len(), 1);
    let item = store.items()[0].clone();
    assert!(!item.is_completed);
    assert_eq!(item.section(), Section::Open);
    assert!(item.is_repeatable);

    let notifications = store.take_notifications();
    assert_eq!(notifications, vec![Notification::ItemAdded { id: item.id }]);
}

#[test]
fn filter_is_a_pure_projection() {
    let mut store = scenario_store();
    store.add("Third", None, false);
    let snapshot = store.items().to_vec();

    let all = store.filter(Tab::All);
    assert_eq!(all.len(), 3);
    assert_eq!(store.filter(Tab::Open).len() + store.filter(Tab::Completed).len(), 3);

    assert_eq!(store.items(), snapshot.as_slice());
}
