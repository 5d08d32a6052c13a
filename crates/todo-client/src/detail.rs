//! Detail/Edit View Controller
//!
//! Editable copy of one item plus an optional picked image. Save uploads the
//! picked image first (if any), then sends one patch; the server's answer
//! replaces every field. Save and delete share the `busy` flag.

use crate::api::ItemApi;
use crate::error::{ClientResult, ValidationError};
use crate::image::{validate_image, ImageFile, ImagePreview, PickedImage};
use crate::models::{Item, ItemId, UpdateItemDto};
use crate::state::StateHandle;

/// Form state of the detail page
#[derive(Debug)]
pub struct DetailState<P> {
    id: ItemId,
    name: String,
    memo: String,
    is_completed: bool,
    /// Last URL the server stored for this item
    image_url: Option<String>,
    picked: Option<PickedImage<P>>,
    busy: bool,
}

/// Everything a save needs, captured before the first `.await`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub id: ItemId,
    pub name: String,
    pub memo: String,
    pub is_completed: bool,
    pub image_url: Option<String>,
    pub upload: Option<ImageFile>,
}

impl SaveRequest {
    fn patch(&self, image_url: Option<String>) -> UpdateItemDto {
        UpdateItemDto {
            name: Some(self.name.clone()),
            memo: Some(Some(self.memo.clone())),
            image_url: Some(image_url),
            is_completed: Some(self.is_completed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Another operation was running, or the view is gone
    Skipped,
    /// Saved; the caller navigates back to the list
    Saved(Item),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Not confirmed, or another operation was running
    Skipped,
    /// Deleted; the caller navigates back to the list
    Deleted(ItemId),
}

impl<P: ImagePreview> DetailState<P> {
    pub fn new(item: &Item) -> Self {
        let mut state = Self {
            id: item.id,
            name: String::new(),
            memo: String::new(),
            is_completed: false,
            image_url: None,
            picked: None,
            busy: false,
        };
        state.sync(item);
        state
    }

    /// Take every field from the server's copy and release any local pick
    fn sync(&mut self, item: &Item) {
        self.id = item.id;
        self.name = item.name.clone();
        self.memo = item.memo.clone().unwrap_or_default();
        self.is_completed = item.is_completed;
        self.image_url = item.image_url.clone().filter(|url| !url.is_empty());
        self.picked = None;
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        self.memo = memo.into();
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn set_completed(&mut self, is_completed: bool) {
        self.is_completed = is_completed;
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn picked_file(&self) -> Option<&ImageFile> {
        self.picked.as_ref().map(|p| &p.file)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validate `file`, then create its preview and make it the current pick.
    ///
    /// A rejected file leaves the state untouched and no preview is created.
    pub fn pick_image(
        &mut self,
        file: ImageFile,
        make_preview: impl FnOnce(&ImageFile) -> P,
    ) -> Result<(), ValidationError> {
        validate_image(&file)?;
        let preview = make_preview(&file);
        log::debug!("[DETAIL] picked {} ({} bytes)", file.name, file.size());
        self.picked = Some(PickedImage { file, preview });
        Ok(())
    }

    pub fn discard_pick(&mut self) {
        self.picked = None;
    }

    /// Local preview first, then the stored URL; `None` shows the placeholder
    pub fn display_image(&self) -> Option<&str> {
        self.picked
            .as_ref()
            .map(|p| p.preview.url())
            .or(self.image_url.as_deref())
    }

    /// Completed, has a memo, or has an image (stored or picked)
    pub fn is_active(&self) -> bool {
        self.is_completed
            || !self.memo.trim().is_empty()
            || self.image_url.is_some()
            || self.picked.is_some()
    }

    /// Start a save. `Ok(None)` while another operation is running.
    pub fn begin_save(&mut self) -> ClientResult<Option<SaveRequest>> {
        if self.busy {
            return Ok(None);
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName.into());
        }
        let request = SaveRequest {
            id: self.id,
            name: name.to_string(),
            memo: self.memo.clone(),
            is_completed: self.is_completed,
            image_url: self.image_url.clone(),
            upload: self.picked_file().cloned(),
        };
        self.busy = true;
        Ok(Some(request))
    }

    pub fn finish_save(&mut self, item: &Item) {
        self.sync(item);
        self.busy = false;
    }

    /// Start a delete. `None` unless confirmed and idle.
    pub fn begin_delete(&mut self, confirmed: bool) -> Option<ItemId> {
        if !confirmed || self.busy {
            return None;
        }
        self.busy = true;
        Some(self.id)
    }

    pub fn end_operation(&mut self) {
        self.busy = false;
    }
}

/// Load one item; `Ok(None)` when the server says it does not exist
pub async fn fetch_item<A>(api: &A, id: ItemId) -> ClientResult<Option<Item>>
where
    A: ItemApi + ?Sized,
{
    match api.get_item(id).await {
        Ok(item) => Ok(Some(item)),
        Err(e) if e.is_not_found() => {
            log::info!("[DETAIL] item {} not found", id);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn send_save<A>(api: &A, request: &SaveRequest) -> ClientResult<Item>
where
    A: ItemApi + ?Sized,
{
    let image_url = match &request.upload {
        Some(file) => Some(api.upload_image(file).await?.url),
        None => request.image_url.clone(),
    };
    api.update_item(request.id, &request.patch(image_url)).await
}

/// Upload the picked image (if any) and save all fields
pub async fn save<A, H, P>(api: &A, state: &H) -> ClientResult<SaveOutcome>
where
    A: ItemApi + ?Sized,
    H: StateHandle<DetailState<P>>,
    P: ImagePreview,
{
    let Some(begun) = state.write(|s| s.begin_save()) else {
        return Ok(SaveOutcome::Skipped);
    };
    let Some(request) = begun? else {
        return Ok(SaveOutcome::Skipped);
    };

    match send_save(api, &request).await {
        Ok(item) => {
            log::info!("[DETAIL] saved item {}", item.id);
            state.write(|s| s.finish_save(&item));
            Ok(SaveOutcome::Saved(item))
        }
        Err(e) => {
            state.write(|s| s.end_operation());
            Err(e)
        }
    }
}

/// Delete the item once the user has confirmed
pub async fn delete<A, H, P>(api: &A, state: &H, confirmed: bool) -> ClientResult<DeleteOutcome>
where
    A: ItemApi + ?Sized,
    H: StateHandle<DetailState<P>>,
    P: ImagePreview,
{
    let Some(Some(id)) = state.write(|s| s.begin_delete(confirmed)) else {
        return Ok(DeleteOutcome::Skipped);
    };
    let result = api.delete_item(id).await;
    state.write(|s| s.end_operation());
    result?;
    Ok(DeleteOutcome::Deleted(id))
}
