use serde::{Deserialize, Serialize};

/// One blog-post summary as produced by the site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Row id assigned by the generator's export; never used for ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub category: String,
    pub url: String,
    /// Already formatted for display, e.g. "March 3, 2024".
    pub publish_date: String,
    pub timestamp: i64,
}

impl Post {
    /// Case-insensitive substring match against title or excerpt.
    ///
    /// `term` must already be lower-cased.
    pub fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.excerpt.to_lowercase().contains(term)
    }

    /// Badge label: the category identifier with its first character upper-cased.
    pub fn category_label(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// The `{ "blogs": [...] }` document embedded in the page or served as `blogs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub blogs: Vec<Post>,
}

impl Dataset {
    pub fn new(blogs: Vec<Post>) -> Self {
        Self { blogs }
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Post;

    fn post(title: &str, excerpt: &str, category: &str) -> Post {
        Post {
            id: None,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            url: "blog/x.html".to_string(),
            publish_date: "January 1, 2024".to_string(),
            timestamp: 0,
        }
    }

    #[test]
    fn matches_title_or_excerpt_ignoring_case() {
        let p = post("Rust Ownership", "Borrowing EXPLAINED", "tech");
        assert!(p.matches_term("ownership"));
        assert!(p.matches_term("explained"));
        assert!(!p.matches_term("lifetimes"));
    }

    #[test]
    fn category_label_capitalises_first_char_only() {
        assert_eq!(post("t", "", "tech").category_label(), "Tech");
        assert_eq!(post("t", "", "movieReviews").category_label(), "MovieReviews");
        assert_eq!(post("t", "", "").category_label(), "");
    }
}
