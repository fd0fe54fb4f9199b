//! View Models
//!
//! Normalized data produced from the API payloads. These are transient
//! view values: every load rebuilds them from the response.

use serde::{Deserialize, Serialize};

/// One entry in the chapter sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterSummary {
    /// Chapter number; an entry without one renders but is not selectable
    pub number: Option<u32>,
    pub title: String,
}

impl ChapterSummary {
    /// Visible text of the sidebar entry, e.g. `1. Al-Fatihah`
    pub fn label(&self) -> String {
        match self.number {
            Some(number) => format!("{}. {}", number, self.title),
            None => self.title.clone(),
        }
    }
}

/// One chapter with its verses, shown in the content pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterDetail {
    pub number: u32,
    pub title: String,
    pub verses: Vec<VerseView>,
}

/// One verse block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseView {
    /// 1-based number within the chapter; rendered blank when absent
    pub number: Option<u32>,
    /// Source-script (Arabic) text
    pub arab: String,
    /// Indonesian translation, empty when the upstream omits it
    pub translation: String,
}
