use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::generator::template_store::{backup_name, TemplateStore};

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").unwrap());

/// Strips comments and the whitespace between tags.
///
/// Single spaces inside text and attribute values are kept, so placeholder
/// tokens come through untouched.
pub fn minify_html(html: &str) -> String {
    let html = COMMENT.replace_all(html, "");
    let html = WHITESPACE_RUN.replace_all(&html, " ");
    let html = BETWEEN_TAGS.replace_all(&html, "><");
    html.trim().to_string()
}

pub fn is_html(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("no html templates found")]
    NoTemplates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyReport {
    pub name: String,
    pub original_bytes: usize,
    pub minified_bytes: usize,
}

impl MinifyReport {
    pub fn saved_bytes(&self) -> usize {
        self.original_bytes.saturating_sub(self.minified_bytes)
    }

    pub fn saved_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.saved_bytes() as f64 * 100.0 / self.original_bytes as f64
    }
}

pub struct Minifier<St: TemplateStore> {
    template_store: St,
}

impl<St: TemplateStore> Minifier<St> {
    pub fn new(template_store: St) -> Self {
        Self { template_store }
    }

    /// Minifies every html document in place, keeping the first unminified copy as backup.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> anyhow::Result<Vec<MinifyReport>> {
        let store = &mut self.template_store;
        let names = store
            .list()?
            .into_iter()
            .filter(|name| is_html(name))
            .collect::<Vec<_>>();
        if names.is_empty() {
            return Err(MinifyError::NoTemplates.into());
        }

        let mut reports = Vec::with_capacity(names.len());
        for name in names {
            let original = store.read(&name)?;
            let minified = minify_html(&original);

            if store.preserve_if_absent(&name)? {
                tracing::info!(message = "Backup created", backup = %backup_name(&name));
            }
            store.write(&name, &minified)?;

            let report = MinifyReport {
                name,
                original_bytes: original.len(),
                minified_bytes: minified.len(),
            };
            tracing::info!(
                message = "Template minified",
                name = %report.name,
                original_kb = format_args!("{:.2}", report.original_bytes as f64 / 1024.0),
                minified_kb = format_args!("{:.2}", report.minified_bytes as f64 / 1024.0),
                saved = format_args!("{:.1}%", report.saved_percent())
            );
            reports.push(report);
        }

        let total_saved = reports.iter().map(MinifyReport::saved_bytes).sum::<usize>();
        tracing::info!(
            message = "All templates minified",
            files = reports.len(),
            total_saved_kb = format_args!("{:.2}", total_saved as f64 / 1024.0)
        );
        Ok(reports)
    }
}
