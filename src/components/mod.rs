//! UI Components
//!
//! Leptos components for the reader layout.

mod chapter_list;
mod chapter_pane;
mod search_bar;

pub use chapter_list::{ChapterList, ListState};
pub use chapter_pane::ChapterPane;
pub use search_bar::SearchBar;
