//! Empty State Component
//!
//! Placeholder for a bucket with no items.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Todo,
    Done,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Todo => "TO DO",
            Section::Done => "DONE",
        }
    }

    fn message(self) -> (&'static str, &'static str) {
        match self {
            Section::Todo => ("Nothing to do yet.", "Add a new todo above!"),
            Section::Done => ("Nothing finished yet.", "Check off a todo when it is done!"),
        }
    }
}

#[component]
pub fn EmptyState(section: Section) -> impl IntoView {
    let (line1, line2) = section.message();
    view! {
        <div class=match section {
            Section::Todo => "empty-state todo",
            Section::Done => "empty-state done",
        }>
            <p>{line1}</p>
            <p>{line2}</p>
        </div>
    }
}
