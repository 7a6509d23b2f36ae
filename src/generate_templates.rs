use anyhow::Result;
use notice_templates::{
    config::GeneratorConfig,
    generator::{
        template_engine::TeraTemplateEngine, template_store::FsTemplateStore, Generator,
    },
};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let config = GeneratorConfig::init()?;
    tracing::info!(message = "Generating templates", dir = %config.template_dir.display(), layout = %config.layout);

    let tera = TeraTemplateEngine::try_init()?;
    let store = FsTemplateStore::new(config.template_dir);
    let mut generator =
        Generator::new(tera, store, config.catalog, config.layout).with_backup(config.backup);
    generator.run()?;
    Ok(())
}
