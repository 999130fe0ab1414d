use crate::models::{Style, StyleCategory};

/// Maximum number of styles returned per category
pub const MAX_RESULTS_PER_CATEGORY: usize = 6;

/// Check whether a style belongs to the category and suits the face shape
///
/// The face shape is compared verbatim against the style's tags, so a tag
/// outside the known enumeration never matches anything.
#[inline]
pub fn matches_style(style: &Style, category: StyleCategory, face_shape: &str) -> bool {
    style.category == category && style.suits(face_shape)
}

/// Pick up to `limit` matching styles, preserving catalog order
pub fn select_matches<'a, I>(
    styles: I,
    category: StyleCategory,
    face_shape: &str,
    limit: usize,
) -> Vec<Style>
where
    I: IntoIterator<Item = &'a Style>,
{
    styles
        .into_iter()
        .filter(|style| matches_style(style, category, face_shape))
        .take(limit)
        .cloned()
        .collect()
}
