use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::{Criteria, Post, SortMode};

/// Derives the result view from the full dataset.
///
/// Steps run in a fixed order: copy, text filter, category filter, sort.
/// The sort is stable, so posts with equal keys keep their dataset order.
pub fn filter_and_sort(posts: &[Post], criteria: &Criteria) -> Vec<Post> {
    let term = criteria.search_term();
    let category = criteria.category();

    let mut results: Vec<Post> = posts
        .iter()
        .filter(|post| term.is_empty() || post.matches_term(term))
        .filter(|post| category.is_empty() || post.category == category)
        .cloned()
        .collect();

    sort_posts(&mut results, criteria.sort_mode());
    results
}

pub fn sort_posts(posts: &mut [Post], mode: SortMode) {
    match mode {
        SortMode::DateDesc => posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortMode::DateAsc => posts.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortMode::TitleAsc => posts.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortMode::TitleDesc => posts.sort_by(|a, b| locale_compare(&b.title, &a.title)),
    }
}

/// Collation-style comparison of display strings.
///
/// Three levels, each consulted only on a tie at the previous one:
/// base letters (accents and case folded away), then accents (unaccented
/// first), then case (lower-case first at the first case-only difference).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded_case(a).cmp(folded_case(b)))
        .then_with(|| case_order(a, b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn folded_case(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::locale_compare;

    #[test]
    fn ignores_case_at_primary_level() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn lowercase_first_on_case_only_difference() {
        assert_eq!(locale_compare("rust", "Rust"), Ordering::Less);
        assert_eq!(locale_compare("Rust", "rust"), Ordering::Greater);
        assert_eq!(locale_compare("Rust", "Rust"), Ordering::Equal);
    }

    #[test]
    fn accents_fold_at_primary_level() {
        assert_eq!(locale_compare("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(locale_compare("Éclair", "Apple"), Ordering::Greater);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "Resume"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_compare("Go", "Go Tips"), Ordering::Less);
    }
}
