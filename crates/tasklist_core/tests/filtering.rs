use chrono::NaiveDate;
use tasklist_core::{FilterMode, MemoryRepository, TaskId, TaskStore, Urgency};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TODAY: (i32, u32, u32) = (2026, 8, 24);

/// Store seeded with yesterday/today/tomorrow due dates, both complete and
/// incomplete, plus an undated task. Returns the store and the ids in
/// insertion order.
fn seeded_store() -> (TaskStore<MemoryRepository>, Vec<TaskId>) {
    let today = date(TODAY.0, TODAY.1, TODAY.2);
    let yesterday = today.pred_opt().unwrap();
    let tomorrow = today.succ_opt().unwrap();

    let mut store = TaskStore::open(MemoryRepository::new()).unwrap();
    let mut ids = Vec::new();

    ids.push(store.add("yesterday open", Some(yesterday)).unwrap().id);
    ids.push(store.add("yesterday done", Some(yesterday)).unwrap().id);
    ids.push(store.add("today open", Some(today)).unwrap().id);
    ids.push(store.add("today done", Some(today)).unwrap().id);
    ids.push(store.add("tomorrow open", Some(tomorrow)).unwrap().id);
    ids.push(store.add("undated open", None).unwrap().id);

    store.toggle_completed(ids[1]).unwrap();
    store.toggle_completed(ids[3]).unwrap();

    (store, ids)
}

fn visible_ids(store: &TaskStore<MemoryRepository>) -> Vec<TaskId> {
    let today = date(TODAY.0, TODAY.1, TODAY.2);
    store
        .visible_tasks(today)
        .into_iter()
        .map(|(task, _)| task.id)
        .collect()
}

#[test]
fn all_filter_returns_every_task_in_insertion_order() {
    let (store, ids) = seeded_store();
    assert_eq!(visible_ids(&store), ids);
}

#[test]
fn pending_filter_excludes_completed_tasks() {
    let (mut store, ids) = seeded_store();
    store.set_filter(FilterMode::Pending);
    assert_eq!(visible_ids(&store), vec![ids[0], ids[2], ids[4], ids[5]]);
}

#[test]
fn completed_filter_returns_only_completed_tasks() {
    let (mut store, ids) = seeded_store();
    store.set_filter(FilterMode::Completed);
    assert_eq!(visible_ids(&store), vec![ids[1], ids[3]]);
}

#[test]
fn due_today_filter_returns_exactly_the_incomplete_today_task() {
    let (mut store, ids) = seeded_store();
    store.set_filter(FilterMode::DueToday);
    assert_eq!(visible_ids(&store), vec![ids[2]]);
}

#[test]
fn overdue_filter_returns_exactly_the_incomplete_yesterday_task() {
    let (mut store, ids) = seeded_store();
    store.set_filter(FilterMode::Overdue);
    assert_eq!(visible_ids(&store), vec![ids[0]]);
}

#[test]
fn urgency_annotation_is_independent_of_the_active_filter() {
    let (mut store, ids) = seeded_store();
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    store.set_filter(FilterMode::Pending);
    let pending: Vec<_> = store
        .visible_tasks(today)
        .into_iter()
        .map(|(task, urgency)| (task.id, urgency))
        .collect();

    assert_eq!(
        pending,
        vec![
            (ids[0], Urgency::Overdue),
            (ids[2], Urgency::DueToday),
            (ids[4], Urgency::Normal),
            (ids[5], Urgency::Normal),
        ]
    );

    // Completed tasks render as normal even when their date has passed.
    store.set_filter(FilterMode::Completed);
    for (_, urgency) in store.visible_tasks(today) {
        assert_eq!(urgency, Urgency::Normal);
    }
}

#[test]
fn empty_match_is_a_normal_value() {
    let mut store = TaskStore::open(MemoryRepository::new()).unwrap();
    store.add("undated", None).unwrap();

    store.set_filter(FilterMode::Overdue);
    assert!(store.visible_tasks(date(2026, 8, 24)).is_empty());
}

#[test]
fn add_complete_and_refilter_scenario() {
    let today = date(2026, 8, 24);
    let mut store = TaskStore::open(MemoryRepository::new()).unwrap();

    let milk = store.add("Buy milk", None).unwrap();
    let bills = store.add("Pay bills", Some(today)).unwrap();

    let all: Vec<_> = store
        .visible_tasks(today)
        .into_iter()
        .map(|(task, urgency)| (task.id, urgency))
        .collect();
    assert_eq!(
        all,
        vec![(milk.id, Urgency::Normal), (bills.id, Urgency::DueToday)]
    );

    store.toggle_completed(bills.id).unwrap();

    store.set_filter(FilterMode::Pending);
    let pending = store.visible_tasks(today);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].0.id, milk.id);
    assert_eq!(pending[0].1, Urgency::Normal);

    store.set_filter(FilterMode::Completed);
    let completed = store.visible_tasks(today);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].0.id, bills.id);
    // Urgency resets to normal once completed.
    assert_eq!(completed[0].1, Urgency::Normal);
}
