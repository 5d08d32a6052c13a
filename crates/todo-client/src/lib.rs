//! Todo Client
//!
//! Tenant-scoped API client for the todo service and the view controllers
//! (list and detail) the UI drives. Target independent: the same code runs in
//! the browser and under native tests.

pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod image;
pub mod list;
pub mod models;
pub mod route;
pub mod state;


pub use api::{ApiClient, ItemApi};
pub use config::ApiConfig;
pub use detail::{DeleteOutcome, DetailState, SaveOutcome};
pub use error::{ClientError, ClientResult, ValidationError};
pub use image::{ImageFile, ImagePreview, MAX_IMAGE_BYTES};
pub use list::{Buckets, ListState};
pub use models::{CreateItemDto, Item, ItemId, UpdateItemDto, UploadedImage};
pub use route::Route;
pub use state::StateHandle;
