//! Entity records and the query state tables read them with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field access used by the filter and sort helpers.
///
/// Paths may be dotted (`location.name`) to reach into nested objects.
pub trait Record {
    fn field(&self, path: &str) -> Option<&Value>;
}

/// One row of a managed collection (camera, location, supervisor, result).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl Record for Entity {
    fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;

        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }

        Some(current)
    }
}

/// Sort direction for a table column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Paging and sorting state held by a table.
///
/// `page_number` is 1-based; both `page_number` and `page_size` stay positive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub page_number: usize,
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
}

impl QueryParams {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
            sort_field: Some("id".to_owned()),
            sort_order: SortOrder::Asc,
        }
    }
}
