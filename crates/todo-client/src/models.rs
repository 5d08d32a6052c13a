//! Item Models
//!
//! Data structures matching the remote API's JSON contract.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier
pub type ItemId = i64;

/// Todo item as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateItemDto {
    pub name: String,
}

impl CreateItemDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of `PATCH /items/{id}`
///
/// Fields left as `None` are not sent and stay unchanged on the server.
/// `memo` and `image_url` are tri-state: `Some(None)` sends an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl UpdateItemDto {
    /// Patch that only flips the completion flag
    pub fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Default::default()
        }
    }
}

/// Response of `POST /images/upload`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_reads_camel_case_and_nulls() {
        let item: Item = serde_json::from_value(json!({
            "id": 1,
            "tenantId": "t1",
            "name": "Buy milk",
            "memo": null,
            "imageUrl": null,
            "isCompleted": false
        }))
        .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.tenant_id, "t1");
        assert_eq!(item.memo, None);
        assert!(!item.is_completed);
    }

    #[test]
    fn item_defaults_missing_optional_fields() {
        let item: Item =
            serde_json::from_value(json!({ "id": 7, "tenantId": "t1", "name": "x" })).unwrap();
        assert_eq!(item.image_url, None);
        assert!(!item.is_completed);
    }

    #[test]
    fn update_dto_skips_omitted_fields() {
        let body = serde_json::to_value(UpdateItemDto::completion(true)).unwrap();
        assert_eq!(body, json!({ "isCompleted": true }));
    }

    #[test]
    fn update_dto_sends_explicit_null() {
        let dto = UpdateItemDto {
            memo: Some(None),
            image_url: Some(Some("https://img/x.png".into())),
            ..Default::default()
        };
        let body = serde_json::to_value(dto).unwrap();
        assert_eq!(body, json!({ "memo": null, "imageUrl": "https://img/x.png" }));
    }

    #[test]
    fn upload_response_requires_url_field() {
        let ok: UploadedImage = serde_json::from_value(json!({ "url": "u" })).unwrap();
        assert_eq!(ok.url, "u");
        assert!(serde_json::from_value::<UploadedImage>(json!({ "imageUrl": "u" })).is_err());
    }
}
