//! Test data: catalogs and a recording diagnostics sink

use std::sync::{Arc, Mutex};
use serde_json::json;
use PharmaLingo::i18n::{Catalog, LanguageCode, MissingTranslationSink, TranslationResolver};

/// Small catalog with the same shape in every language
pub fn test_catalog() -> Catalog {
    Catalog::new()
        .with_tree(LanguageCode::Uz, json!({
            "footer": { "consultation": "Onlayn maslahat" },
            "greeting": "Salom {{name}}"
        }))
        .expect("uz tree")
        .with_tree(LanguageCode::Ru, json!({
            "footer": { "consultation": "Онлайн-консультация" },
            "greeting": "Привет {{name}}"
        }))
        .expect("ru tree")
        .with_tree(LanguageCode::En, json!({
            "footer": { "consultation": "Online consultation" },
            "greeting": "Hello {{name}}"
        }))
        .expect("en tree")
}

/// Sink that remembers every reported miss
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(LanguageCode, String)>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<(LanguageCode, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl MissingTranslationSink for RecordingSink {
    fn missing_translation(&self, language: LanguageCode, key: &str) {
        self.entries.lock().unwrap().push((language, key.to_string()));
    }
}

/// Resolver over `catalog` whose misses are recorded
pub fn recording_resolver(catalog: Catalog) -> (TranslationResolver, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let resolver = TranslationResolver::new(Arc::new(catalog)).with_sink(sink.clone());
    (resolver, sink)
}
