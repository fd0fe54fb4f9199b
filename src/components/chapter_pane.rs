//! Chapter Content Pane
//!
//! Loads and renders the selected chapter. The pane owns its loading,
//! not-found and failure placeholders; no load error escapes it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{ChapterDetail, VerseView};
use crate::normalize;

#[derive(Clone, PartialEq)]
enum PaneState {
    Welcome,
    Loading,
    Loaded(ChapterDetail),
    NotFound,
    Failed,
}

#[component]
pub fn ChapterPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(PaneState::Welcome);
    let pane_ref = NodeRef::<html::Section>::new();

    // Reload whenever a chapter is activated. Overlapping loads race and
    // the last response to resolve keeps the pane.
    Effect::new(move |_| {
        let Some(number) = ctx.selected.get() else { return };
        set_state.set(PaneState::Loading);
        spawn_local(async move {
            let next = match api::fetch_chapter(number).await {
                Ok(payload) => match normalize::chapter_detail(&payload, number) {
                    Some(detail) => PaneState::Loaded(detail),
                    None => {
                        web_sys::console::error_1(
                            &format!("[ChapterPane] unexpected surah payload: {}", payload).into(),
                        );
                        PaneState::NotFound
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[ChapterPane] surah {} load failed: {}", number, err).into(),
                    );
                    PaneState::Failed
                }
            };
            set_state.set(next);
            scroll_pane_to_top(pane_ref);
        });
    });

    view! {
        <section class="surah-content" node_ref=pane_ref>
            {move || match state.get() {
                PaneState::Welcome => view! {
                    <div class="welcome">
                        <h1>"Al-Quran Digital"</h1>
                        <p>"Pilih surat di samping untuk mulai membaca."</p>
                    </div>
                }
                    .into_any(),
                PaneState::Loading => view! {
                    <div class="pane-status">
                        <h4>"Memuat surat..."</h4>
                    </div>
                }
                    .into_any(),
                PaneState::NotFound => view! {
                    <p class="load-error">"Surat tidak ditemukan atau format tidak sesuai."</p>
                }
                    .into_any(),
                PaneState::Failed => view! {
                    <p class="load-error">"Gagal memuat surat."</p>
                }
                    .into_any(),
                PaneState::Loaded(detail) => view! {
                    <div class="surah-header">
                        <h1>{detail.title.clone()}</h1>
                        <p class="surah-subtitle">{format!("Surat ke-{}", detail.number)}</p>
                    </div>
                    {detail.verses.iter().map(verse_block).collect_view()}
                }
                    .into_any(),
            }}
        </section>
    }
}

/// One verse: number, source text, translation
fn verse_block(verse: &VerseView) -> impl IntoView {
    view! {
        <div class="verse-block">
            <span class="verse-number">
                {verse.number.map(|n| n.to_string()).unwrap_or_default()}
            </span>
            <div class="verse-body">
                <h2 class="verse-arab" dir="rtl">{verse.arab.clone()}</h2>
                <p class="verse-translation">{verse.translation.clone()}</p>
            </div>
        </div>
    }
}

/// Reset the pane's own scroll offset, then bring the pane to the
/// viewport top with smooth scrolling
fn scroll_pane_to_top(pane: NodeRef<html::Section>) {
    let Some(el) = pane.get_untracked() else { return };
    el.set_scroll_top(0);
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
