//! Integration tests for the language store
//!
//! Covers persistence across reloads, change notification ordering,
//! rejection of unsupported codes and subscriber isolation.

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use helpers::*;
use PharmaLingo::i18n::{LanguageChanged, LanguageCode, LanguageStore, LANGUAGE_CHANGED_EVENT};
use PharmaLingo::state::{FileStorage, LanguageStorage, MemoryStorage};

#[test]
fn test_set_then_reload_restores_language() {
    init_test_env();
    let storage = MemoryStorage::new();

    let first_tab = memory_store(&storage);
    first_tab.initialize(None);
    first_tab.set(LanguageCode::Uz);

    let reloaded = memory_store(&storage);
    assert_eq!(reloaded.get(), LanguageCode::En);
    assert_eq!(reloaded.initialize(Some("ru-RU")), LanguageCode::Uz);
    assert_eq!(reloaded.get(), LanguageCode::Uz);
}

#[test]
fn test_reload_through_file_storage() {
    let ctx = SimpleTestContext::new().expect("Failed to create simple context");
    let path = ctx.temp_path().join("origin.json");

    let store = LanguageStore::new(Arc::new(FileStorage::new(&path)), LanguageCode::En);
    store.initialize(None);
    store.set(LanguageCode::Ru);

    let reloaded = LanguageStore::new(Arc::new(FileStorage::new(&path)), LanguageCode::En);
    assert_eq!(reloaded.initialize(None), LanguageCode::Ru);
}

#[test]
fn test_initialize_uses_locale_hint_then_fallback() {
    init_test_env();
    let storage = MemoryStorage::new();

    assert_eq!(memory_store(&storage).initialize(Some("uz-Latn-UZ")), LanguageCode::Uz);
    assert_eq!(memory_store(&storage).initialize(Some("ru")), LanguageCode::Ru);
    assert_eq!(memory_store(&storage).initialize(Some("fr-FR")), LanguageCode::En);
    assert_eq!(memory_store(&storage).initialize(None), LanguageCode::En);

    let ru_fallback = LanguageStore::new(Arc::new(storage.clone()), LanguageCode::Ru);
    assert_eq!(ru_fallback.initialize(Some("de")), LanguageCode::Ru);

    // initialize never writes the detected value back
    assert_eq!(storage.read("language").unwrap(), None);
}

#[test]
fn test_unsupported_persisted_value_is_not_adopted() {
    init_test_env();
    let storage = MemoryStorage::new();
    storage.write("language", "fr").unwrap();

    let store = memory_store(&storage);
    assert_eq!(store.initialize(Some("ru_RU.UTF-8")), LanguageCode::Ru);
}

#[test]
fn test_setting_same_language_notifies_every_time() {
    init_test_env();
    let storage = CountingStorage::default();
    let store = LanguageStore::new(Arc::new(storage.clone()), LanguageCode::En);
    let log = event_log();
    let _subscription = store.subscribe(recording_listener(&log));

    store.set(LanguageCode::Ru);
    store.set(LanguageCode::Ru);

    let events = log.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], LanguageChanged { language: LanguageCode::Ru, previous: LanguageCode::Ru });
    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unsupported_code_is_rejected_without_side_effects() {
    init_test_env();
    let storage = CountingStorage::default();
    let store = LanguageStore::new(Arc::new(storage.clone()), LanguageCode::En);
    store.set(LanguageCode::Uz);

    let log = event_log();
    let _subscription = store.subscribe(recording_listener(&log));
    let writes_before = storage.writes.load(Ordering::SeqCst);

    assert!(!store.set_code("fr"));

    assert_eq!(store.get(), LanguageCode::Uz);
    assert_eq!(storage.writes.load(Ordering::SeqCst), writes_before);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_unsubscribing_one_listener_keeps_the_other() {
    init_test_env();
    let store = memory_store(&MemoryStorage::new());
    let first = event_log();
    let second = event_log();

    let first_subscription = store.subscribe(recording_listener(&first));
    let _second_subscription = store.subscribe(recording_listener(&second));

    assert!(first_subscription.unsubscribe());
    store.set(LanguageCode::Ru);

    assert!(first.lock().unwrap().is_empty());
    let events = second.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].language, LanguageCode::Ru);
    assert_eq!(events[0].name(), LANGUAGE_CHANGED_EVENT);
}

#[test]
fn test_listeners_run_in_subscription_order_for_every_change() {
    init_test_env();
    let store = memory_store(&MemoryStorage::new());
    let calls: Arc<Mutex<Vec<(usize, LanguageCode)>>> = Arc::new(Mutex::new(Vec::new()));

    let mut subscriptions = Vec::new();
    for index in 0..3 {
        let calls = Arc::clone(&calls);
        subscriptions.push(store.subscribe(move |event| {
            calls.lock().unwrap().push((index, event.language));
        }));
    }

    store.set(LanguageCode::Uz);
    store.set(LanguageCode::En);

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            (0, LanguageCode::Uz),
            (1, LanguageCode::Uz),
            (2, LanguageCode::Uz),
            (0, LanguageCode::En),
            (1, LanguageCode::En),
            (2, LanguageCode::En),
        ]
    );
    assert_eq!(store.subscriber_count(), 3);
}

#[test]
fn test_write_failure_keeps_memory_value_and_broadcasts() {
    init_test_env();
    let storage = Arc::new(FailingStorage::default());
    let store = LanguageStore::new(storage.clone(), LanguageCode::En);
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    let _subscription = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set(LanguageCode::Uz);

    assert_eq!(store.get(), LanguageCode::Uz);
    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert_eq!(storage.write_attempts.load(Ordering::SeqCst), 1);
}
