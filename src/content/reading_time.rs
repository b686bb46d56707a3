//! Reading-time estimate for one article
//!
//! Derived view value, recomputed whenever a post is rendered. Words are
//! counted by splitting on single spaces, matching how the estimate has
//! always been displayed; it is a rough figure, not a typography metric.

use crate::cms::richtext;
use crate::content::Post;

/// Assumed reading rate
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate shown before a post has loaded, and for empty posts
pub const DEFAULT_ESTIMATE: &str = "0 min";

/// Count the words of a space-separated text; zero when empty
fn words(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split(' ').count()
    }
}

/// Total word count across all sections (heading + body text)
pub fn word_count(post: &Post) -> usize {
    post.data
        .content
        .iter()
        .map(|section| words(&section.heading) + words(&richtext::as_text(&section.body)))
        .sum()
}

/// Human-readable reading time, e.g. `"3 min"`
///
/// A fractional minute always counts as a full minute. An absent post and a
/// post with no words both yield [`DEFAULT_ESTIMATE`]; missing sections or
/// bodies contribute zero, never an error.
pub fn estimate(post: Option<&Post>) -> String {
    let Some(post) = post else {
        return DEFAULT_ESTIMATE.to_string();
    };

    let minutes = word_count(post).div_ceil(WORDS_PER_MINUTE);
    format!("{} min", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Banner, BodyBlock, PostData, Section};

    fn post_with_sections(sections: Vec<Section>) -> Post {
        Post {
            uid: "test".to_string(),
            first_publication_date: None,
            data: PostData {
                title: "Test".to_string(),
                banner: Banner::default(),
                author: "Ada".to_string(),
                content: sections,
            },
        }
    }

    fn section(heading: &str, body: &[&str]) -> Section {
        Section {
            heading: heading.to_string(),
            body: body
                .iter()
                .map(|text| BodyBlock {
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_five_words_round_up_to_one_minute() {
        let post = post_with_sections(vec![section("Hello world", &["one two three"])]);
        assert_eq!(word_count(&post), 5);
        assert_eq!(estimate(Some(&post)), "1 min");
    }

    #[test]
    fn test_empty_post_is_zero_minutes() {
        let post = post_with_sections(vec![]);
        assert_eq!(word_count(&post), 0);
        assert_eq!(estimate(Some(&post)), "0 min");
    }

    #[test]
    fn test_boundary_just_above_multiple() {
        // 401 words: one over two full minutes, rounds up to three
        let text = vec!["word"; 399].join(" ");
        let post = post_with_sections(vec![section("heading word", &[text.as_str()])]);
        assert_eq!(word_count(&post), 401);
        assert_eq!(estimate(Some(&post)), "3 min");
    }

    #[test]
    fn test_absent_post_uses_default() {
        assert_eq!(estimate(None), DEFAULT_ESTIMATE);
    }

    #[test]
    fn test_empty_heading_contributes_nothing() {
        let post = post_with_sections(vec![section("", &["one two"])]);
        assert_eq!(word_count(&post), 2);
    }

    #[test]
    fn test_words_sum_across_sections() {
        let post = post_with_sections(vec![
            section("alpha", &["one two"]),
            section("beta gamma", &["three"]),
        ]);
        assert_eq!(word_count(&post), 6);
    }
}
