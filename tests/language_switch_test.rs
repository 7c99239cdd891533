//! End-to-end language switching
//!
//! A footer component subscribes to the store and re-renders through the
//! resolver whenever the selector changes the language.

mod helpers;

use std::sync::{Arc, Mutex};
use helpers::*;
use PharmaLingo::config::{I18nConfig, Settings, StorageBackend};
use PharmaLingo::i18n::{keys, Catalog, I18n, LanguageCode};
use PharmaLingo::state::{storage_from_config, MemoryStorage};

fn app(storage: MemoryStorage) -> I18n {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    I18n::from_config(&I18nConfig::default(), catalog, Arc::new(storage))
}

#[test]
fn test_footer_rerenders_on_language_change() {
    init_test_env();
    let i18n = app(MemoryStorage::new());
    i18n.store().initialize(Some("ru-RU"));

    let rendered = Arc::new(Mutex::new(vec![i18n.t(keys::FOOTER_CONSULTATION)]));
    let footer = i18n.clone();
    let output = Arc::clone(&rendered);
    let subscription = i18n.subscribe(move |_| {
        output.lock().unwrap().push(footer.t(keys::FOOTER_CONSULTATION));
    });

    assert!(i18n.store().set_code("uz"));
    assert!(!i18n.store().set_code("de"));
    i18n.set_language(LanguageCode::En);
    assert!(subscription.unsubscribe());
    i18n.set_language(LanguageCode::Ru);

    assert_eq!(
        *rendered.lock().unwrap(),
        vec![
            "Онлайн-консультация".to_string(),
            "Onlayn maslahat".to_string(),
            "Online consultation".to_string(),
        ]
    );
}

#[test]
fn test_selection_survives_reload() {
    init_test_env();
    let storage = MemoryStorage::new();

    let first = app(storage.clone());
    first.store().initialize(None);
    first.set_language(LanguageCode::Uz);

    let second = app(storage);
    second.store().initialize(Some("en-US"));
    assert_eq!(second.language(), LanguageCode::Uz);
    assert_eq!(second.t(keys::NOT_FOUND_TITLE), "Sahifa topilmadi");
}

#[test]
fn test_composition_from_settings() {
    let ctx = SimpleTestContext::new().expect("Failed to create simple context");
    let mut settings = Settings::default();
    settings.storage.backend = StorageBackend::File;
    settings.storage.path = Some(ctx.temp_path().join("storage.json").display().to_string());
    settings.validate().expect("valid settings");

    let storage = storage_from_config(&settings.storage).expect("storage");
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    let i18n = I18n::from_config(&settings.i18n, catalog.clone(), storage);
    i18n.set_language(LanguageCode::Ru);

    let reopened = storage_from_config(&settings.storage).expect("storage");
    let reloaded = I18n::from_config(&settings.i18n, catalog, reopened);
    assert_eq!(reloaded.store().initialize(None), LanguageCode::Ru);
}
