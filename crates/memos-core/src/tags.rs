//! Hashtag extraction from memo content.
//!
//! A tag is any maximal run of characters following a `#` that contains no
//! ASCII whitespace (space, `\t`, `\n`, `\f`, `\r`) and no further `#`. Other
//! Unicode spaces such as U+3000 and U+00A0 are part of the tag. Nothing else about the surrounding text is
//! interpreted: headings, code spans and URL fragments all yield tags.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([^\t\n\f\r #]+)").expect("tag pattern must compile"));

/// Extract the tag names referenced in `content`.
///
/// Returns deduplicated names sorted ascending. Case is preserved, so
/// `#Rust` and `#rust` are distinct tags.
///
/// # Examples
///
/// ```
/// use memos_core::find_tag_list_from_memo_content;
///
/// let tags = find_tag_list_from_memo_content("hello #world #foo #world");
/// assert_eq!(tags, vec!["foo".to_string(), "world".to_string()]);
/// ```
pub fn find_tag_list_from_memo_content(content: &str) -> Vec<String> {
    collect_tags(content).into_iter().collect()
}

/// Same as [`find_tag_list_from_memo_content`] but yields the ordered set
/// directly, for callers that merge tags from many memos.
pub fn collect_tags(content: &str) -> BTreeSet<String> {
    TAG_PATTERN
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(content: &str) -> Vec<String> {
        find_tag_list_from_memo_content(content)
    }

    #[test]
    fn test_dedup_and_sort() {
        assert_eq!(tags("hello #world #foo #world"), vec!["foo", "world"]);
    }

    #[test]
    fn test_empty_and_tagless_content() {
        assert!(tags("").is_empty());
        assert!(tags("no tags here").is_empty());
        assert!(tags("# lonely hash").is_empty());
        assert!(tags("trailing #").is_empty());
    }

    #[test]
    fn test_adjacent_hashes_split_tags() {
        assert_eq!(tags("#a#b"), vec!["a", "b"]);
        assert_eq!(tags("##double"), vec!["double"]);
    }

    #[test]
    fn test_tag_runs_until_whitespace() {
        assert_eq!(tags("#work/project-x, done"), vec!["work/project-x,"]);
        assert_eq!(tags("#one\n#two\t#three"), vec!["one", "three", "two"]);
        assert_eq!(tags("#cr\r#ff\x0c#end"), vec!["cr", "end", "ff"]);
    }

    #[test]
    fn test_non_ascii_spaces_belong_to_the_tag() {
        assert_eq!(
            tags("#foo\u{3000}bar #x\u{a0}y"),
            vec!["foo\u{3000}bar", "x\u{a0}y"]
        );
        assert_eq!(tags("#a\u{2003}b c"), vec!["a\u{2003}b"]);
    }

    #[test]
    fn test_vertical_tab_is_not_a_separator() {
        assert_eq!(tags("#a\x0bb"), vec!["a\x0bb"]);
    }

    #[test]
    fn test_hash_inside_word_still_matches() {
        assert_eq!(tags("issue#42"), vec!["42"]);
        assert_eq!(tags("https://example.com/#anchor"), vec!["anchor"]);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(tags("#Rust #rust"), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_unicode_tags() {
        assert_eq!(tags("#日本語 #café"), vec!["café", "日本語"]);
    }

    #[test]
    fn test_collect_tags_matches_list() {
        let content = "#b #a #b";
        let set = collect_tags(content);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), tags(content));
    }
}
