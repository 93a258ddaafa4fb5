use std::{env, path::PathBuf};

use anyhow::{Context as _, bail};
use vantage_utils::parse::parse_field_list;

pub const CATALOG_VAR: &str = "VANTAGE_CATALOG";
pub const PAGE_SIZE_VAR: &str = "VANTAGE_PAGE_SIZE";
pub const PAGER_SIZE_VAR: &str = "VANTAGE_PAGER_SIZE";
pub const SEARCH_KEYS_VAR: &str = "VANTAGE_SEARCH_KEYS";

/// Console settings read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub catalog: PathBuf,
    pub page_size: usize,
    pub pager_size: usize,
    pub search_keys: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset and blank values fall
    /// back to defaults, except the catalog path which is required.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        let catalog = value(CATALOG_VAR)
            .map(PathBuf::from)
            .with_context(|| format!("{CATALOG_VAR} must point at a catalog JSON file"))?;

        let page_size = positive(PAGE_SIZE_VAR, value(PAGE_SIZE_VAR), 10)?;
        let pager_size = positive(PAGER_SIZE_VAR, value(PAGER_SIZE_VAR), 5)?;

        let search_keys = parse_field_list(&value(SEARCH_KEYS_VAR).unwrap_or_else(|| "name".to_owned()));
        if search_keys.is_empty() {
            bail!("{SEARCH_KEYS_VAR} must name at least one field");
        }

        Ok(Self {
            catalog,
            page_size,
            pager_size,
            search_keys,
        })
    }
}

fn positive(key: &str, raw: Option<String>, default: usize) -> anyhow::Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let parsed = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a positive integer, got `{raw}`"))?;
    if parsed == 0 {
        bail!("{key} must be a positive integer, got `{raw}`");
    }
    Ok(parsed)
}
