//! Reactive State Handles
//!
//! Lets the controller relays in `todo_client` read and write view state kept
//! in a Leptos signal.

use leptos::prelude::*;
use todo_client::StateHandle;

/// `RwSignal` seen through [`StateHandle`].
///
/// Reads are untracked; once the owning view is disposed both methods return
/// `None` and late responses are dropped.
pub struct SignalState<S: Send + Sync + 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> Clone for SignalState<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SignalState<S> {}

impl<S: Send + Sync + 'static> SignalState<S> {
    pub fn new(value: S) -> Self {
        Self(RwSignal::new(value))
    }

    pub fn signal(&self) -> RwSignal<S> {
        self.0
    }
}

impl<S: Send + Sync + 'static> StateHandle<S> for SignalState<S> {
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
