use anyhow::Result;
use notice_templates::{
    config, generator::template_store::FsTemplateStore, restore::restore_backups,
};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let mut store = FsTemplateStore::new(config::template_dir());
    restore_backups(&mut store)?;
    Ok(())
}
