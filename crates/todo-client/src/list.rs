//! List View Controller
//!
//! Holds the loaded collection and the new-item draft. The async relays call
//! the API and fold server responses back into the state; nothing changes
//! locally before the server confirms.

use crate::api::ItemApi;
use crate::error::ClientResult;
use crate::models::{CreateItemDto, Item, ItemId, UpdateItemDto};
use crate::state::StateHandle;

/// State of the list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// `None` until the first successful load
    items: Option<Vec<Item>>,
    draft: String,
    load_started: bool,
    load_failed: bool,
    creating: bool,
}

/// Items split by completion, each in collection order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    pub incomplete: Vec<&'a Item>,
    pub complete: Vec<&'a Item>,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    /// Loaded, and the server has no items for this tenant
    pub fn is_empty(&self) -> bool {
        self.items.as_ref().is_some_and(Vec::is_empty)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// The one load attempt failed; the view will not load again
    pub fn is_load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn buckets(&self) -> Buckets<'_> {
        let (complete, incomplete): (Vec<&Item>, Vec<&Item>) = self
            .items
            .iter()
            .flatten()
            .partition(|item| item.is_completed);
        Buckets {
            incomplete,
            complete,
        }
    }

    /// Marks the load as started; false if it already was
    pub fn begin_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load_started, true)
    }

    /// Apply the loaded collection. Items created while the load was in
    /// flight and missing from the response stay at the front.
    pub fn finish_load(&mut self, items: Vec<Item>) {
        let mut merged: Vec<Item> = self
            .items
            .take()
            .unwrap_or_default()
            .into_iter()
            .filter(|local| !items.iter().any(|item| item.id == local.id))
            .collect();
        merged.extend(items);
        self.items = Some(merged);
    }

    pub fn fail_load(&mut self) {
        self.load_failed = true;
    }

    /// Payload for a create, or `None` when the draft is blank or a create
    /// is already in flight
    pub fn begin_create(&mut self) -> Option<CreateItemDto> {
        if self.creating {
            return None;
        }
        let name = self.draft.trim();
        if name.is_empty() {
            return None;
        }
        self.creating = true;
        Some(CreateItemDto::new(name))
    }

    /// Newest-first: created items go to the front
    pub fn created(&mut self, item: Item) {
        self.creating = false;
        self.draft.clear();
        self.items.get_or_insert_with(Vec::new).insert(0, item);
    }

    pub fn create_failed(&mut self) {
        self.creating = false;
    }

    /// Patch that flips the completion of `id`
    pub fn toggle_patch(&self, id: ItemId) -> Option<UpdateItemDto> {
        self.items
            .iter()
            .flatten()
            .find(|item| item.id == id)
            .map(|item| UpdateItemDto::completion(!item.is_completed))
    }

    /// Replace the item with the same id by the server's copy
    pub fn replace(&mut self, updated: Item) -> bool {
        match self
            .items
            .iter_mut()
            .flatten()
            .find(|item| item.id == updated.id)
        {
            Some(item) => {
                *item = updated;
                true
            }
            None => false,
        }
    }
}

/// Fetch the collection once per view
pub async fn load<A, H>(api: &A, state: &H) -> ClientResult<()>
where
    A: ItemApi + ?Sized,
    H: StateHandle<ListState>,
{
    if state.write(ListState::begin_load) != Some(true) {
        return Ok(());
    }
    let items = match api.list_items().await {
        Ok(items) => items,
        Err(e) => {
            state.write(ListState::fail_load);
            return Err(e);
        }
    };
    log::info!("[LIST] loaded {} items", items.len());
    state.write(|s| s.finish_load(items));
    Ok(())
}

/// Create an item from the draft. `Ok(None)` means nothing was sent.
pub async fn create<A, H>(api: &A, state: &H) -> ClientResult<Option<Item>>
where
    A: ItemApi + ?Sized,
    H: StateHandle<ListState>,
{
    let Some(dto) = state.write(ListState::begin_create).flatten() else {
        return Ok(None);
    };
    match api.create_item(&dto).await {
        Ok(item) => {
            state.write(|s| s.created(item.clone()));
            Ok(Some(item))
        }
        Err(e) => {
            state.write(ListState::create_failed);
            Err(e)
        }
    }
}

/// Flip completion of `id` and apply the server's answer
pub async fn toggle<A, H>(api: &A, state: &H, id: ItemId) -> ClientResult<()>
where
    A: ItemApi + ?Sized,
    H: StateHandle<ListState>,
{
    let Some(patch) = state.read(|s| s.toggle_patch(id)).flatten() else {
        return Ok(());
    };
    let updated = api.update_item(id, &patch).await?;
    log::debug!("[LIST] item {} completed={}", updated.id, updated.is_completed);
    state.write(|s| s.replace(updated));
    Ok(())
}
