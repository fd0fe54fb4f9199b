//! Payload Normalization
//!
//! The chapter API is served in several shapes depending on deployment.
//! Every normalized field goes through an ordered list of accessor paths
//! and the first present, usable value wins. Null fields count as absent,
//! empty strings count as unusable.

use serde_json::Value;

use crate::models::{ChapterDetail, ChapterSummary, VerseView};

/// Fallback title when no name field resolves
pub const UNTITLED: &str = "Nama surat";

/// Title paths for sidebar entries, in priority order
const TITLE_PATHS: &[&[&str]] = &[
    &["name", "transliteration", "id"],
    &["translation", "id"],
    &["name", "short"],
    &["name", "long"],
    &["short"],
];

/// Title paths for the detail header: the transliterated or translated
/// name is preferred over the source-script one
const DETAIL_TITLE_PATHS: &[&[&str]] = &[
    &["name", "transliteration", "id"],
    &["translation", "id"],
    &["name", "short"],
    &["name", "long"],
];

const VERSE_TEXT_PATHS: &[&[&str]] = &[&["text", "arab"], &["ar"], &["text"]];

const VERSE_TRANSLATION_PATHS: &[&[&str]] = &[
    &["translation", "id"],
    &["translation"],
    &["translation", "text"],
    &["text", "translation"],
];

/// Walk `path` into `record`, treating missing keys and nulls as absent
fn value_at<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for key in path {
        current = current.get(key)?;
    }
    if current.is_null() {
        return None;
    }
    Some(current)
}

/// Non-empty string at `path`
fn string_at<'a>(record: &'a Value, path: &[&str]) -> Option<&'a str> {
    value_at(record, path)?.as_str().filter(|s| !s.is_empty())
}

/// First non-empty string across `paths`
fn first_string<'a>(record: &'a Value, paths: &[&[&str]]) -> Option<&'a str> {
    paths.iter().find_map(|path| string_at(record, path))
}

/// Accept an integer, a whole-number float, or a numeric string
fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Resolve the chapter sequence of the index payload: first present of
/// `data`, `surahs`, the payload itself. Returns `None` when the resolved
/// value is not an array at all.
pub fn chapter_seq(payload: &Value) -> Option<&[Value]> {
    let resolved = value_at(payload, &["data"])
        .or_else(|| value_at(payload, &["surahs"]))
        .unwrap_or(payload);
    resolved.as_array().map(Vec::as_slice)
}

/// Chapter number under any of its alternate key names
pub fn chapter_number(record: &Value) -> Option<u32> {
    ["number", "no", "nomor"]
        .into_iter()
        .find_map(|key| value_at(record, &[key]))
        .and_then(as_u32)
}

/// Sidebar title with priority over the alternate name fields
pub fn chapter_title(record: &Value) -> String {
    first_string(record, TITLE_PATHS)
        .unwrap_or(UNTITLED)
        .to_string()
}

pub fn chapter_summary(record: &Value) -> ChapterSummary {
    ChapterSummary {
        number: chapter_number(record),
        title: chapter_title(record),
    }
}

/// Normalize the whole index payload into sidebar entries, in upstream
/// order. `None` means the payload did not resolve to a sequence.
pub fn chapter_list(payload: &Value) -> Option<Vec<ChapterSummary>> {
    Some(chapter_seq(payload)?.iter().map(chapter_summary).collect())
}

/// Resolve the chapter record of a detail payload: its `data` field when
/// present, else the payload itself
fn chapter_record(payload: &Value) -> &Value {
    value_at(payload, &["data"]).unwrap_or(payload)
}

pub fn verse_view(record: &Value) -> VerseView {
    let number = value_at(record, &["number", "inSurah"])
        .or_else(|| value_at(record, &["number"]))
        .and_then(as_u32);
    VerseView {
        number,
        arab: first_string(record, VERSE_TEXT_PATHS)
            .unwrap_or_default()
            .to_string(),
        translation: first_string(record, VERSE_TRANSLATION_PATHS)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Normalize a detail payload. `None` means the record is absent or has
/// no verse sequence; an empty-but-present sequence is a valid chapter
/// with zero verses. `requested` fills in when the record omits its own
/// number.
pub fn chapter_detail(payload: &Value, requested: u32) -> Option<ChapterDetail> {
    let record = chapter_record(payload);
    let verses = value_at(record, &["verses"])?.as_array()?;
    Some(ChapterDetail {
        number: chapter_number(record).unwrap_or(requested),
        title: first_string(record, DETAIL_TITLE_PATHS)
            .unwrap_or_default()
            .to_string(),
        verses: verses.iter().map(verse_view).collect(),
    })
}
