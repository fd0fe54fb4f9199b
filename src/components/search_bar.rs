//! Search Bar
//!
//! Filters the sidebar on every keystroke; submit jumps to the first
//! matching chapter.

use leptos::prelude::*;

use crate::components::ListState;
use crate::context::AppContext;
use crate::filter;

#[component]
pub fn SearchBar(
    keyword: ReadSignal<String>,
    set_keyword: WriteSignal<String>,
    list: ReadSignal<ListState>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = keyword.get();
        let chapters = match list.get() {
            ListState::Loaded(chapters) => chapters,
            _ => Vec::new(),
        };
        match filter::first_match(&chapters, &query) {
            // same selection path as a click; a match without a number
            // takes no activation
            Some(chapter) => {
                if let Some(number) = chapter.number {
                    ctx.select(number);
                }
            }
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Surat tidak ditemukan");
                }
            }
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                class="search-input"
                placeholder="Cari surat..."
                autocomplete="off"
                prop:value=move || keyword.get()
                on:input=move |ev| set_keyword.set(event_target_value(&ev))
            />
            <button type="submit">"Cari"</button>
        </form>
    }
}
