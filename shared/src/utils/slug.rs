//! Slug derivation for resource names

/// Derive the URL-safe slug of `name`.
///
/// Letters and digits are lowercased; every run of other characters becomes
/// a single `-`, and leading/trailing separators are dropped.
///
/// ```
/// use nb_shared::utils::slug::slugify;
///
/// assert_eq!(slugify("Home Decor"), "home-decor");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
