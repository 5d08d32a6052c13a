//! API Configuration
//!
//! Passed explicitly to [`crate::ApiClient::new`]; nothing here reads the
//! process environment.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "https://assignment-todolist-api.vercel.app";

/// Connection settings for the remote todo API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server origin, e.g. `https://api.example.com` (trailing `/` allowed)
    pub base_url: String,
    /// Tenant namespace used in every path; required before any request
    pub tenant_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tenant_id: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, tenant_id: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            tenant_id,
        }
    }

    /// Config for the default server and the given tenant
    pub fn for_tenant(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: Some(tenant_id.into()),
            ..Default::default()
        }
    }

    /// Tenant id, or a configuration error when it is missing or blank
    pub fn tenant_id(&self) -> ClientResult<&str> {
        match self.tenant_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ClientError::Configuration(
                "tenant id is not set; configure TODO_TENANT_ID".to_string(),
            )),
        }
    }

    /// Base URL without trailing slashes
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
