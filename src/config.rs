use std::{env, path::PathBuf};

use thiserror::Error;

use crate::generator::{
    catalog::{Catalog, UnknownCatalog},
    layout::{Layout, UnknownLayout},
};

pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TEMPLATE_LAYOUT")]
    Layout(#[from] UnknownLayout),
    #[error("invalid TEMPLATE_CATALOG")]
    Catalog(#[from] UnknownCatalog),
    #[error("invalid {key} `{value}`, expected true or false")]
    Flag { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,
    pub layout: Layout,
    pub catalog: Catalog,
    pub backup: bool,
}

impl GeneratorConfig {
    pub fn init() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let template_dir = template_dir_from(&var);
        let layout = var("TEMPLATE_LAYOUT")
            .map(|val| val.parse::<Layout>())
            .transpose()?
            .unwrap_or_default();
        // Each layout ships with its own body text unless told otherwise.
        let catalog = var("TEMPLATE_CATALOG")
            .map(|val| val.parse::<Catalog>())
            .transpose()?
            .unwrap_or_else(|| Catalog::for_layout(layout));
        let backup = var("TEMPLATE_BACKUP")
            .map(|val| parse_flag("TEMPLATE_BACKUP", val))
            .transpose()?
            .unwrap_or(true);
        Ok(Self {
            template_dir,
            layout,
            catalog,
            backup,
        })
    }
}

pub fn template_dir() -> PathBuf {
    template_dir_from(|key| env::var(key).ok())
}

fn template_dir_from<F>(var: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    var("TEMPLATE_DIR")
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR))
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag { key, value }),
    }
}
