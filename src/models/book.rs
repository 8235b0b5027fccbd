//! Book model and request/query types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog record.
///
/// Identifiers are unique by convention only: the create operation honors
/// whatever id the caller supplies without checking for collisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Payload for create and full-update requests.
///
/// `id` is honored on create when present (the next-id counter fills the gap
/// otherwise) and ignored on update, where the stored id is preserved.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewBook {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Partial-update payload. Absent and null keys leave the field untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
}

/// Price field of a patch: a JSON number, or a string parseable as one.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

/// Query parameters for title search
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: Option<String>,
}

/// Query parameters for the price-range filter
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Query parameters for the sorted listing
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Sort key for the sorted listing. Unrecognized keys fall back to `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "author" => SortKey::Author,
            _ => SortKey::Title,
        }
    }
}

/// Sort direction. Anything other than `desc` means ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_fallback() {
        assert_eq!(SortKey::from("author"), SortKey::Author);
        assert_eq!(SortKey::from("AUTHOR"), SortKey::Author);
        assert_eq!(SortKey::from("title"), SortKey::Title);
        assert_eq!(SortKey::from("price"), SortKey::Title);
    }

    #[test]
    fn test_sort_order_default() {
        assert_eq!(SortOrder::from("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::from("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_patch_null_means_untouched() {
        let patch: BookPatch =
            serde_json::from_str(r#"{"title": null, "price": "12.50"}"#).unwrap();
        assert!(patch.title.is_none());
        assert!(patch.author.is_none());
        assert!(matches!(patch.price, Some(PriceInput::Text(_))));
    }
}
