//! Quran Reader App
//!
//! Main application component: searchable chapter sidebar on the left,
//! chapter content pane on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ChapterList, ChapterPane, ListState, SearchBar};
use crate::context::AppContext;
use crate::normalize;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (list, set_list) = signal(ListState::Loading);
    let (keyword, set_keyword) = signal(String::new());
    let (selected, set_selected) = signal::<Option<u32>>(None);

    // Provide the selection to all children
    provide_context(AppContext::new((selected, set_selected)));

    // Load the chapter index once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_chapter_index().await {
                Ok(payload) => match normalize::chapter_list(&payload) {
                    Some(chapters) => {
                        web_sys::console::log_1(
                            &format!("[APP] Loaded {} surahs", chapters.len()).into(),
                        );
                        set_list.set(ListState::Loaded(chapters));
                    }
                    None => {
                        web_sys::console::error_1(
                            &format!("[APP] unexpected surah index payload: {}", payload).into(),
                        );
                        set_list.set(ListState::Unavailable);
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] surah index load failed: {}", err).into(),
                    );
                    set_list.set(ListState::Failed);
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: searchable chapter list
            <aside class="sidebar">
                <SearchBar keyword=keyword set_keyword=set_keyword list=list/>
                <ChapterList list=list keyword=keyword/>
            </aside>

            // Right: chapter content
            <ChapterPane/>
        </div>
    }
}
