mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use surf_core::storage::{JournalStore, NewJournalEntry};
use surf_core::{DraftCommit, IndexPath, InteractiveQueue, ListSynchronizer, SurfError};

use common::{date, scenario_store, FaultyStore};

fn counting_observer(list: &ListSynchronizer) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    list.set_observer(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    calls
}

#[test]
fn test_scenario_first_row_is_newest() {
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(scenario_store(), queue.handle()).unwrap();

    assert_eq!(list.section_count(), 1);
    assert_eq!(list.item_count(0), 3);

    let first = list.entry(IndexPath::new(0, 0));
    assert_eq!(first.date, date(2024, 1, 5));
    assert_eq!(first.star_count(), 5);

    let last = list.entry(IndexPath::row(2));
    assert_eq!(last.date, date(2024, 1, 1));
    assert_eq!(last.star_count(), 0);
}

#[test]
fn test_startup_fetch_failure_is_configuration_error() {
    let store = Arc::new(FaultyStore::new());
    store.fail_fetch(true);
    let queue = InteractiveQueue::new();

    let result = ListSynchronizer::initialize(store, queue.handle());
    assert!(matches!(result, Err(SurfError::StartupConfiguration(_))));
}

#[test]
fn test_delete_removes_exactly_one_entry() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store.clone(), queue.handle()).unwrap();
    let calls = counting_observer(&list);

    let victim = list.entry(IndexPath::row(1));
    list.delete(IndexPath::row(1)).unwrap();

    // Committed before returning.
    assert!(store.get(&victim.id).unwrap().is_none());
    assert_eq!(
        store
            .fetch(&surf_core::storage::EntryQuery::all())
            .unwrap()
            .len(),
        2
    );

    queue.run_pending();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(list.item_count(0), 2);
    assert!(list.snapshot().iter().all(|entry| entry.id != victim.id));
}

#[test]
fn test_failed_save_surfaces_persist_error() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store.clone(), queue.handle()).unwrap();
    let calls = counting_observer(&list);

    store.fail_save(true);
    let result = list.delete(IndexPath::row(0));

    assert!(matches!(result, Err(SurfError::Persist(_))));
    assert_eq!(queue.run_pending(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(list.item_count(0), 3);
}

#[test]
fn test_each_mutation_notifies_once() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store.clone(), queue.handle()).unwrap();
    let calls = counting_observer(&list);

    // Insert
    let newest = store.add(NewJournalEntry::new(date(2024, 2, 1)).with_rating(3));
    queue.run_pending();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(list.item_count(0), 4);
    assert_eq!(list.entry(IndexPath::row(0)).id, newest);

    // Update that moves the entry to the bottom of the list
    let mut draft = list.draft(IndexPath::row(0));
    draft.set_date(date(2023, 12, 31));
    assert_eq!(draft.commit().unwrap(), DraftCommit::Updated(newest));
    queue.run_pending();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(list.entry(IndexPath::row(3)).id, newest);

    // Delete
    list.delete(IndexPath::row(3)).unwrap();
    queue.run_pending();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(list.item_count(0), 3);
}

#[test]
fn test_notifications_are_marshalled_to_queue_thread() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store.clone(), queue.handle()).unwrap();
    let observed_on = Arc::new(std::sync::Mutex::new(None));
    let slot = Arc::clone(&observed_on);
    list.set_observer(Box::new(move || {
        *slot.lock().unwrap() = Some(std::thread::current().id());
    }));

    let writer = Arc::clone(&store);
    std::thread::spawn(move || {
        writer.add(NewJournalEntry::new(date(2024, 3, 3)));
    })
    .join()
    .unwrap();

    assert!(observed_on.lock().unwrap().is_none());
    common::drain_until(&queue, || observed_on.lock().unwrap().is_some());
    assert_eq!(
        *observed_on.lock().unwrap(),
        Some(std::thread::current().id())
    );
    assert_eq!(list.item_count(0), 4);
}

#[test]
fn test_failed_reload_keeps_previous_view() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store.clone(), queue.handle()).unwrap();
    let calls = counting_observer(&list);

    store.add(NewJournalEntry::new(date(2024, 4, 1)));
    store.fail_fetch(true);
    queue.run_pending();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(list.item_count(0), 3);
}

#[test]
fn test_discarded_draft_does_not_notify() {
    let store = scenario_store();
    let queue = InteractiveQueue::new();
    let list = ListSynchronizer::initialize(store, queue.handle()).unwrap();
    let calls = counting_observer(&list);

    let mut draft = list.draft(IndexPath::row(0));
    draft.set_location(Some("Somewhere else".to_string()));
    draft.discard();

    assert_eq!(queue.run_pending(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        list.entry(IndexPath::row(0)).location.as_deref(),
        Some("Mavericks")
    );
}
