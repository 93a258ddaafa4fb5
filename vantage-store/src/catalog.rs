use std::{collections::BTreeMap, path::Path, sync::Arc};

use anyhow::{Context as _, bail};
use serde_json::Value;
use tracing::info;
use vantage_utils::Entity;

/// Read-only collections loaded from a catalog file, keyed by table name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    tables: BTreeMap<String, Arc<[Entity]>>,
}

impl Catalog {
    /// Parse a catalog: a JSON object mapping table names to arrays of objects.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let root: Value = serde_json::from_str(raw).context("catalog is not valid JSON")?;
        let Value::Object(tables) = root else {
            bail!("catalog must be a JSON object of table name to rows");
        };

        let mut catalog = Self::default();
        for (name, rows) in tables {
            let Value::Array(rows) = rows else {
                bail!("table `{name}` must be an array of objects");
            };

            let entities = rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    Entity::from_value(row)
                        .with_context(|| format!("row {index} of table `{name}` is not an object"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            catalog.insert(name, entities);
        }

        Ok(catalog)
    }

    /// Load and parse a catalog file.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;

        info!(
            path = %path.display(),
            tables = catalog.tables.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn insert(&mut self, name: impl Into<String>, rows: Vec<Entity>) {
        self.tables.insert(name.into(), rows.into());
    }

    pub fn table(&self, name: &str) -> Option<Arc<[Entity]>> {
        self.tables.get(name).cloned()
    }

    /// Table names with their row counts, in name order.
    pub fn summary(&self) -> Vec<(&str, usize)> {
        self.tables
            .iter()
            .map(|(name, rows)| (name.as_str(), rows.len()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn parses_tables_in_name_order() {
        let catalog = Catalog::from_json(
            r#"{"zones": [{"id": 1}], "cameras": [{"id": 1}, {"id": 2}]}"#,
        )
        .expect("catalog");

        assert_eq!(catalog.summary(), vec![("cameras", 2), ("zones", 1)]);
        assert_eq!(catalog.table("cameras").expect("cameras").len(), 2);
        assert!(catalog.table("alerts").is_none());
    }

    #[test]
    fn rejects_malformed_catalogs() {
        let err = Catalog::from_json("[]").expect_err("array root");
        assert!(err.to_string().contains("JSON object"));

        let err = Catalog::from_json(r#"{"cameras": {"id": 1}}"#).expect_err("object table");
        assert!(err.to_string().contains("`cameras`"));

        let err = Catalog::from_json(r#"{"cameras": [{"id": 1}, 7]}"#).expect_err("scalar row");
        assert!(err.to_string().contains("row 1"));

        assert!(Catalog::from_json("{").is_err());
    }

    #[tokio::test]
    async fn loads_catalog_from_disk() {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_nanos());
        let path = std::env::temp_dir().join(format!("vantage-catalog-{stamp}.json"));
        tokio::fs::write(&path, r#"{"alerts": [{"id": 3, "kind": "intrusion"}]}"#)
            .await
            .expect("write catalog");

        let catalog = Catalog::load(&path).await.expect("load");
        assert_eq!(catalog.summary(), vec![("alerts", 1)]);

        tokio::fs::remove_file(&path).await.expect("cleanup");
        let err = Catalog::load(&path).await.expect_err("missing file");
        assert!(err.to_string().contains("failed to read catalog"));
    }
}
