use crate::generator::template_store::{TemplateStore, BACKUP_SUFFIX};

/// Copies every `<name>.backup` back over `<name>`. Backups are kept.
///
/// Returns the restored names in store order.
#[tracing::instrument(level = "debug", skip(template_store))]
pub fn restore_backups<St: TemplateStore>(template_store: &mut St) -> anyhow::Result<Vec<String>> {
    let mut restored = Vec::new();
    for backup in template_store.list()? {
        let original = match backup.strip_suffix(BACKUP_SUFFIX) {
            Some(original) if !original.is_empty() && !original.ends_with(BACKUP_SUFFIX) => {
                original.to_string()
            }
            _ => continue,
        };
        template_store.copy(&backup, &original)?;
        tracing::info!(message = "Template restored", name = %original);
        restored.push(original);
    }
    tracing::info!(message = "All backups restored", restored = restored.len());
    Ok(restored)
}
