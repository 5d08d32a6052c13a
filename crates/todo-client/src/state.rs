//! State Handles
//!
//! Controller relays read and write view state through a [`StateHandle`] and
//! never keep a borrow alive across an `.await`.

use std::cell::RefCell;

/// Shared access to one view's state.
///
/// Both methods return `None` once the view has been torn down; relays then
/// drop whatever response they were about to apply.
pub trait StateHandle<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> StateHandle<S> for RefCell<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
