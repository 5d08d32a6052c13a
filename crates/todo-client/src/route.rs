//! Hash Routes
//!
//! `#/` is the list, `#/items/{id}` a detail page.

use crate::models::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(ItemId),
    NotFound,
}

impl Route {
    /// Parse a location hash (`#/items/3`) or a bare path (`/items/3`)
    pub fn parse(location: &str) -> Self {
        let path = location.trim_start_matches('#').trim_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Route::List,
            (Some("items"), Some(id), None) => match id.parse::<ItemId>() {
                Ok(id) if id >= 0 => Route::Detail(id),
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// Whether this is the detail page of `id`
    pub fn shows_item(&self, id: ItemId) -> bool {
        *self == Route::Detail(id)
    }

    pub fn href(&self) -> String {
        match self {
            Route::List | Route::NotFound => "#/".to_string(),
            Route::Detail(id) => format!("#/items/{}", id),
        }
    }
}
