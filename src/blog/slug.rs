//! Slug derivation for blog posts.
//!
//! The slug is the public lookup key for a post, derived from its title at
//! creation and again on any title-changing update.

/// Derive a URL-safe slug from a title
///
/// Lower-cases the title, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen, and trims leading/trailing hyphens.
/// Pure and deterministic. A title with no alphanumeric characters yields
/// an empty string; callers reject that case before writing.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
