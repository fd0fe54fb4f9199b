//! Sidebar Filter
//!
//! Pure matching helpers behind the search field.

use crate::models::ChapterSummary;

/// Case-insensitive substring match against an entry's visible label.
/// An empty keyword matches everything.
pub fn keyword_match(label: &str, keyword: &str) -> bool {
    label.to_lowercase().contains(&keyword.to_lowercase())
}

/// First entry, in rendered order, whose label matches the keyword
pub fn first_match<'a>(
    chapters: &'a [ChapterSummary],
    keyword: &str,
) -> Option<&'a ChapterSummary> {
    chapters
        .iter()
        .find(|chapter| keyword_match(&chapter.label(), keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chapter(number: Option<u32>, title: &str) -> ChapterSummary {
        ChapterSummary {
            number,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert!(keyword_match("2. Al-Baqarah", "baq"));
        assert!(keyword_match("2. Al-Baqarah", "BAQ"));
        assert!(!keyword_match("1. Al-Fatihah", "baq"));
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        assert!(keyword_match("1. Al-Fatihah", ""));
        assert!(keyword_match("", ""));
    }

    #[test]
    fn test_keyword_can_match_the_number_prefix() {
        // the filter runs over the visible text, number included
        assert!(keyword_match("114. An-Nas", "114"));
    }

    #[test]
    fn test_first_match_in_rendered_order() {
        let chapters = vec![
            make_chapter(Some(1), "Al-Fatihah"),
            make_chapter(Some(2), "Al-Baqarah"),
            make_chapter(Some(3), "Ali 'Imran"),
        ];
        let found = first_match(&chapters, "al").expect("should match");
        assert_eq!(found.number, Some(1));
        let found = first_match(&chapters, "baq").expect("should match");
        assert_eq!(found.number, Some(2));
    }

    #[test]
    fn test_first_match_none_when_nothing_matches() {
        let chapters = vec![make_chapter(Some(1), "Al-Fatihah")];
        assert!(first_match(&chapters, "zukhruf").is_none());
    }

    #[test]
    fn test_first_match_can_land_on_unselectable_entry() {
        // an entry without a number still has visible text; activating it
        // is the caller's no-op
        let chapters = vec![
            make_chapter(None, "Nama surat"),
            make_chapter(Some(2), "Al-Baqarah"),
        ];
        let found = first_match(&chapters, "nama").expect("should match");
        assert_eq!(found.number, None);
    }
}
