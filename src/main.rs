//! Smart Library - session runner
//!
//! Opens the library from its snapshot, reports its state and writes the
//! snapshot back.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_library::{config::AppConfig, AppError, Library};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("Starting Smart Library v{}", env!("CARGO_PKG_VERSION"));

    let snapshot_path = config.storage.snapshot_path.clone();
    let library = match Library::load(&snapshot_path, &config.library) {
        Ok(library) => library,
        Err(e) => exit_with(&e, "load", &snapshot_path),
    };

    report(&library, config.library.history_display);

    if let Err(e) = library.save(&snapshot_path) {
        exit_with(&e, "save", &snapshot_path);
    }

    Ok(())
}

/// Log a snapshot failure and exit with its numeric error code
fn exit_with(err: &AppError, action: &str, path: &std::path::Path) -> ! {
    tracing::error!(
        code = err.exit_code(),
        "Failed to {} library snapshot {}: {}",
        action,
        path.display(),
        err
    );
    std::process::exit(err.exit_code())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("smart_library={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn report(library: &Library, history_display: usize) {
    let on_loan = library
        .list_books()
        .iter()
        .filter(|b| !b.available)
        .count();

    tracing::info!(
        "{} books ({} on loan), {} users, {} pending loan requests",
        library.book_count(),
        on_loan,
        library.user_count(),
        library.pending_requests().len()
    );
    tracing::info!(
        "{} categories, {} related titles, {} relations",
        library.categories().node_count(),
        library.relations().len(),
        library.relations().edge_count()
    );

    for entry in library.recent_history(history_display) {
        tracing::info!("{}", entry);
    }
}
