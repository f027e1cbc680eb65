// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anchor ids derived from titles.

/// Lowercase `title`, keep ASCII letters, digits, whitespace and `-`, turn
/// whitespace runs into single dashes and trim dashes from both ends.
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    for c in cleaned.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}

/// Id for the `index`-th child of `parent` titled `title`.
pub fn child_id(parent: &str, title: &str, index: usize) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{parent}-{index}")
    } else {
        format!("{parent}-{slug}")
    }
}
