use blogsearch_core::Post;

/// Shown in place of results when the active criteria match nothing.
pub const NO_RESULTS_PLACEHOLDER: &str = r#"
                <div class="no-results" style="text-align: center; padding: 4rem 2rem; color: #718096;">
                    <p style="font-size: 1.125rem;">No blogs found matching your criteria.</p>
                    <p style="font-size: 0.875rem; margin-top: 1rem;">Try adjusting your search or filters.</p>
                </div>
            "#;

/// Markup for the display region while criteria is active.
pub fn render_results(posts: &[Post]) -> String {
    if posts.is_empty() {
        return NO_RESULTS_PLACEHOLDER.to_string();
    }
    posts.iter().map(render_post).collect()
}

/// One result entry.
///
/// Only the title is escaped. Excerpt, url, category and date come from the
/// same-origin generator and are inserted as authored.
pub fn render_post(post: &Post) -> String {
    let excerpt = if post.excerpt.is_empty() {
        String::new()
    } else {
        format!(
            "\n                    <p class=\"blog-excerpt\">{}</p>",
            post.excerpt
        )
    };

    format!(
        r#"
                <article class="blog-item">
                    <span class="category-badge category-{category}">{label}</span>
                    <h2><a href="{url}">{title}</a></h2>
                    <p class="blog-date">Published on {date}</p>{excerpt}
                    <a href="{url}" class="read-more">Read more →</a>
                </article>
            "#,
        category = post.category,
        label = post.category_label(),
        url = post.url,
        title = escape_html(&post.title),
        date = post.publish_date,
        excerpt = excerpt,
    )
}

/// Escapes text the way assigning `textContent` and reading `innerHTML` does:
/// `&`, `<`, `>` and non-breaking spaces. Quotes are left alone.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
