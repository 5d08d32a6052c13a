//! UI Components
//!
//! Leptos components for the list and detail pages.

mod delete_confirm_button;
mod empty_state;
mod header;
mod image_picker;
mod item_detail;
mod item_row;
mod list_page;
mod new_item_form;
mod notice_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_state::{EmptyState, Section};
pub use header::{Header, NotFound};
pub use image_picker::ImagePicker;
pub use item_detail::DetailPage;
pub use item_row::ItemRow;
pub use list_page::ListPage;
pub use new_item_form::NewItemForm;
pub use notice_bar::NoticeBar;
