//! HTTP client for the tenant-scoped todo API, built on [`reqwest`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::ItemApi;
use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::image::ImageFile;
use crate::models::{CreateItemDto, Item, ItemId, UpdateItemDto, UploadedImage};

/// Multipart field the upload endpoint reads the file from
const IMAGE_FIELD: &str = "image";

/// Characters escaped when the tenant id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP client for one tenant of the todo API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`]
    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full URL for a tenant-scoped path such as `/items/3`.
    ///
    /// Fails before anything touches the network when the tenant is missing.
    pub fn endpoint(&self, path: &str) -> ClientResult<String> {
        let tenant = self.config.tenant_id()?;
        Ok(format!(
            "{}/api/{}{}",
            self.config.base(),
            utf8_percent_encode(tenant, PATH_SEGMENT),
            path
        ))
    }

    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        Ok(self
            .http
            .request(method, url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache"))
    }

    /// Send a request and return its body when the server answered with JSON.
    ///
    /// `Ok(None)` means a successful response without a JSON body.
    async fn execute(&self, builder: RequestBuilder) -> ClientResult<Option<String>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        log::debug!("[API] {} {}", method, path);

        let response = self.http.execute(request).await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", method, path, e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[API] {} {} -> {}", method, path, status);
            return Err(ClientError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        if !is_json {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        match self.execute(builder).await? {
            Some(body) => Ok(serde_json::from_str(&body)?),
            None => Err(ClientError::Decode(
                "expected a JSON body, got an empty response".to_string(),
            )),
        }
    }
}

#[async_trait(?Send)]
impl ItemApi for ApiClient {
    async fn list_items(&self) -> ClientResult<Vec<Item>> {
        let builder = self.request(Method::GET, "/items")?;
        self.execute_json(builder).await
    }

    async fn get_item(&self, id: ItemId) -> ClientResult<Item> {
        let builder = self.request(Method::GET, &format!("/items/{}", id))?;
        self.execute_json(builder).await
    }

    async fn create_item(&self, dto: &CreateItemDto) -> ClientResult<Item> {
        let builder = self.request(Method::POST, "/items")?.json(dto);
        let item: Item = self.execute_json(builder).await?;
        log::info!("[API] created item {}", item.id);
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, dto: &UpdateItemDto) -> ClientResult<Item> {
        let builder = self
            .request(Method::PATCH, &format!("/items/{}", id))?
            .json(dto);
        self.execute_json(builder).await
    }

    async fn delete_item(&self, id: ItemId) -> ClientResult<()> {
        let builder = self.request(Method::DELETE, &format!("/items/{}", id))?;
        self.execute(builder).await?;
        log::info!("[API] deleted item {}", id);
        Ok(())
    }

    async fn upload_image(&self, file: &ImageFile) -> ClientResult<UploadedImage> {
        let builder = self.request(Method::POST, "/images/upload")?;
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type())
            .map_err(|e| ClientError::Decode(format!("bad MIME type for {}: {}", file.name, e)))?;
        let form = reqwest::multipart::Form::new().part(IMAGE_FIELD, part);
        let uploaded: UploadedImage = self.execute_json(builder.multipart(form)).await?;
        log::info!("[API] uploaded {} ({} bytes)", file.name, file.size());
        Ok(uploaded)
    }
}
