//! Image Picking
//!
//! A picked file is validated before a preview is created for it. The preview
//! is an owned handle that releases its local resource when dropped.

use crate::error::ValidationError;

/// Largest accepted upload (5 MiB, inclusive)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// In-memory file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    /// MIME type reported by the picker, if any
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// MIME type to send: the picker's if it parses, else guessed from the
    /// file name
    pub fn mime_type(&self) -> String {
        match self.content_type.as_deref() {
            Some(mime) if mime.parse::<mime_guess::mime::Mime>().is_ok() => mime.to_string(),
            _ => mime_guess::from_path(&self.name)
                .first_or_octet_stream()
                .to_string(),
        }
    }
}

/// Local preview of a picked image.
///
/// Implementors free their resource in `Drop`; the detail state drops the
/// handle whenever the pick is replaced, discarded or saved.
pub trait ImagePreview {
    /// URL the UI can display
    fn url(&self) -> &str;
}

/// A validated pick together with its preview
#[derive(Debug)]
pub struct PickedImage<P> {
    pub file: ImageFile,
    pub preview: P,
}

fn is_permitted_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Check name and size without needing the file contents
pub fn validate_image_meta(name: &str, size: u64) -> Result<(), ValidationError> {
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }
    if name.is_empty() || !name.chars().all(is_permitted_name_char) {
        return Err(ValidationError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

pub fn validate_image(file: &ImageFile) -> Result<(), ValidationError> {
    validate_image_meta(&file.name, file.size())
}
