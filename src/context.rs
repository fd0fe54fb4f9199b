//! Application Context
//!
//! Shared selection state provided via the Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Number of the chapter shown in the content pane - read
    pub selected: ReadSignal<Option<u32>>,
    /// write half, go through `select`
    set_selected: WriteSignal<Option<u32>>,
}

impl AppContext {
    pub fn new(selected: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>)) -> Self {
        Self {
            selected: selected.0,
            set_selected: selected.1,
        }
    }

    /// Activate one chapter. Every entry derives its active marker from
    /// the same signal, so the previous selection clears in the same
    /// write and re-selecting the active chapter reloads it.
    pub fn select(&self, number: u32) {
        self.set_selected.set(Some(number));
    }
}
