//! Browser Glue
//!
//! Location hash, file reading and object URL previews.

use js_sys::Uint8Array;
use leptos::prelude::window;
use todo_client::image::validate_image_meta;
use todo_client::{ImageFile, ImagePreview, Route};
use wasm_bindgen_futures::JsFuture;

pub fn current_route() -> Route {
    let hash = window().location().hash().unwrap_or_default();
    Route::parse(&hash)
}

pub fn set_hash(hash: &str) {
    if let Err(e) = window().location().set_hash(hash) {
        log::warn!("[NAV] could not set hash {}: {:?}", hash, e);
    }
}

/// `blob:` URL for a picked file; revoked on drop
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_file(file: &web_sys::File) -> Result<Self, String> {
        web_sys::Url::create_object_url_with_blob(file)
            .map(ObjectUrl)
            .map_err(|e| format!("could not preview {}: {:?}", file.name(), e))
    }
}

impl ImagePreview for ObjectUrl {
    fn url(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = web_sys::Url::revoke_object_url(&self.0) {
            log::warn!("[IMAGE] revoke failed: {:?}", e);
        }
    }
}

/// Check, read and preview a file from an `<input type="file">`.
///
/// Name and size are checked before the contents are read.
pub async fn read_image(file: web_sys::File) -> Result<(ImageFile, ObjectUrl), String> {
    let name = file.name();
    validate_image_meta(&name, file.size() as u64).map_err(|e| e.to_string())?;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {:?}", name, e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());

    let preview = ObjectUrl::for_file(&file)?;
    Ok((ImageFile::new(name, content_type, bytes), preview))
}
