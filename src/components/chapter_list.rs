//! Chapter Sidebar
//!
//! Renders the chapter index as a selectable, filterable list. The load
//! itself lives in `App`; this component only renders the resulting
//! state and wires selection.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::keyword_match;
use crate::models::ChapterSummary;

/// Sidebar contents once the index load resolves
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<ChapterSummary>),
    /// payload resolved but was not a sequence
    Unavailable,
    /// fetch or parse failed
    Failed,
}

#[component]
pub fn ChapterList(list: ReadSignal<ListState>, keyword: ReadSignal<String>) -> impl IntoView {
    view! {
        <ul class="surah-list">
            {move || match list.get() {
                ListState::Loading => {
                    view! { <li class="surah-item muted">"Memuat daftar surah..."</li> }.into_any()
                }
                ListState::Unavailable => {
                    view! { <li class="surah-item muted">"Daftar surah tidak tersedia"</li> }
                        .into_any()
                }
                ListState::Failed => {
                    view! { <li class="surah-item muted">"Gagal memuat daftar surah"</li> }
                        .into_any()
                }
                ListState::Loaded(chapters) => chapters
                    .into_iter()
                    .map(|chapter| view! { <ChapterEntry chapter=chapter keyword=keyword/> })
                    .collect_view()
                    .into_any(),
            }}
        </ul>
    }
}

/// One sidebar row; an entry without a number renders but takes no clicks
#[component]
fn ChapterEntry(chapter: ChapterSummary, keyword: ReadSignal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let label = chapter.label();
    let number = chapter.number;
    let is_active = move || number.is_some() && ctx.selected.get() == number;
    let shown = {
        let label = label.clone();
        move || keyword_match(&label, &keyword.get())
    };

    view! {
        <li
            class=move || if is_active() { "surah-item active" } else { "surah-item" }
            style:display=move || if shown() { "" } else { "none" }
            on:click=move |_| {
                if let Some(number) = number {
                    ctx.select(number);
                }
            }
        >
            {label}
        </li>
    }
}
