//! PharmaLingo
//!
//! Composition root: loads settings, the catalog and the persisted language,
//! then wires the store and resolver together.

use std::sync::Arc;
use tracing::{info, warn};

use PharmaLingo::{
    config::Settings,
    i18n::{keys, params, Catalog, I18n, LanguageCode},
    state::storage_from_config,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", PharmaLingo::info());

    let fallback = LanguageCode::from_code(&settings.i18n.default_language).unwrap_or(LanguageCode::En);

    info!("Loading translations...");
    let catalog = match &settings.i18n.translations_dir {
        Some(dir) => Catalog::load_dir(dir, fallback).await?,
        None => Catalog::builtin()?,
    };

    let report = catalog.validate();
    if !report.is_complete() {
        warn!(?report, "Translation catalog has gaps");
    }
    catalog.ensure_keys(keys::ALL)?;

    let stats = catalog.stats();
    info!(total_keys = stats.total_keys, languages = stats.languages.len(), "Catalog ready");

    info!("Opening preference storage ({:?})...", settings.storage.backend);
    let storage = storage_from_config(&settings.storage)?;

    let i18n = I18n::from_config(&settings.i18n, Arc::new(catalog), storage);
    let language = i18n.store().initialize_from_environment();

    let footer = Arc::clone(i18n.resolver());
    let subscription = i18n.subscribe(move |event| {
        info!(
            event = event.name(),
            language = %event.language,
            footer = %footer.t(event.language, keys::FOOTER_CONSULTATION),
            "Re-rendering footer"
        );
    });

    info!(language = %language, "{}", i18n.t(keys::LANGUAGE_LABEL));
    for (code, name, selected) in i18n.language_options() {
        info!(code = %code, selected = selected, "{}", name);
    }
    info!("{}", i18n.t(keys::FOOTER_CONSULTATION));
    info!("{}", i18n.t_with(keys::FOOTER_RIGHTS, &params([("year", 2025)])));

    subscription.unsubscribe();

    info!("PharmaLingo has been shut down.");

    Ok(())
}
