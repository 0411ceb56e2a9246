use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::db::CategoryRecord;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub message: String,
    /// `{id: type}` object, keyed by the stringified category id.
    #[schema(value_type = Object)]
    pub categories: Map<String, Value>,
    pub categories_count: usize,
}

/// Build the `{id: type}` wire map. `serde_json::Map` preserves insertion
/// order, so the keys come out ascending as long as the input is.
pub fn category_map(categories: &[CategoryRecord]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_is_keyed_by_stringified_id() {
        let map = category_map(&[
            CategoryRecord { id: 1, kind: "Science".into() },
            CategoryRecord { id: 2, kind: "Art".into() },
        ]);
        assert_eq!(map["1"], "Science");
        assert_eq!(map["2"], "Art");
        assert_eq!(map.len(), 2);
    }
}
