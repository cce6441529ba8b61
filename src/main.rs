use anyhow::Result;
use farm_portal::config::Config;
use farm_portal::i18n::{Language, TranslationValidator};
use farm_portal::server;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("farm_portal=info".parse()?),
        )
        .init();

    info!("Starting farm portal");

    let config = Config::from_env()?;

    let report = TranslationValidator::validate_sources(&farm_portal::i18n::strings::SOURCES);
    for warning in &report.warnings {
        warn!("Translation: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            warn!("Translation: {}", error);
        }
        warn!(
            "{} translation errors; affected keys will display as raw keys",
            report.errors.len()
        );
    }
    info!("Loaded translations for {} languages", Language::ALL.len());

    server::serve(config).await
}
