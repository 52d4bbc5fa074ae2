//! The paginated list envelope returned by the content backend.
//!
//! Lists come back either as `{ "data": [...], "last_page": n }` or as a bare
//! JSON array. Both are accepted; anything else is read as an empty page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Default page size used by every admin list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One page of records plus the backend's page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub last_page: u32,
}

fn first_page() -> u32 {
    1
}

impl<T: DeserializeOwned> Paginated<T> {
    /// Read a list response in either supported shape.
    ///
    /// A `data` field that is not an array, or a body that is neither an
    /// object nor an array, yields an empty page with `last_page = 1`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        match value {
            serde_json::Value::Array(_) => Ok(Self {
                data: serde_json::from_value(value)?,
                last_page: 1,
            }),
            serde_json::Value::Object(mut map) => {
                let last_page = map
                    .get("last_page")
                    .and_then(|v| v.as_u64())
                    .map(|v| v as u32)
                    .unwrap_or(1);
                let data = match map.remove("data") {
                    Some(items @ serde_json::Value::Array(_)) => serde_json::from_value(items)?,
                    _ => Vec::new(),
                };
                Ok(Self { data, last_page })
            }
            _ => Ok(Self {
                data: Vec::new(),
                last_page: 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn envelope_shape() {
        let page: Paginated<Item> = Paginated::from_value(serde_json::json!({
            "data": [{ "id": 1 }, { "id": 2 }],
            "last_page": 4
        }))
        .unwrap();
        assert_eq!(page.data, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(page.last_page, 4);
    }

    #[test]
    fn bare_array_is_single_page() {
        let page: Paginated<Item> =
            Paginated::from_value(serde_json::json!([{ "id": 9 }])).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn missing_last_page_defaults_to_one() {
        let page: Paginated<Item> =
            Paginated::from_value(serde_json::json!({ "data": [] })).unwrap();
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn unexpected_shapes_are_empty() {
        let page: Paginated<Item> =
            Paginated::from_value(serde_json::json!({ "data": "nope" })).unwrap();
        assert!(page.data.is_empty());

        let page: Paginated<Item> = Paginated::from_value(serde_json::json!("text")).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn malformed_items_are_an_error() {
        let result: Result<Paginated<Item>, _> =
            Paginated::from_value(serde_json::json!({ "data": [{ "name": "x" }] }));
        assert!(result.is_err());
    }
}
