//! Remote API
//!
//! [`ItemApi`] is the seam the view controllers talk to; [`ApiClient`] is the
//! HTTP implementation.

mod client;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::image::ImageFile;
use crate::models::{CreateItemDto, Item, ItemId, UpdateItemDto, UploadedImage};

pub use client::ApiClient;

/// Tenant-scoped item operations.
///
/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait ItemApi {
    /// `GET /items`
    async fn list_items(&self) -> ClientResult<Vec<Item>>;

    /// `GET /items/{id}`; a missing item is an HTTP 404 error
    async fn get_item(&self, id: ItemId) -> ClientResult<Item>;

    /// `POST /items`
    async fn create_item(&self, dto: &CreateItemDto) -> ClientResult<Item>;

    /// `PATCH /items/{id}`
    async fn update_item(&self, id: ItemId, dto: &UpdateItemDto) -> ClientResult<Item>;

    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: ItemId) -> ClientResult<()>;

    /// `POST /images/upload`, multipart field `image`
    async fn upload_image(&self, file: &ImageFile) -> ClientResult<UploadedImage>;
}
