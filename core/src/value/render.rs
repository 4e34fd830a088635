//! Joining of textual value components with elidable trailing separators.
//!
//! Composite textual values such as person names
//! delimit their components with a separator character,
//! and trailing empty components may or may not be followed by separators.
//! The _trailing null level_ is the index of the last component
//! which is always emitted,
//! so that the separators before it are kept even if it is empty.

/// Join `segments` with `separator`,
/// dropping trailing empty segments beyond `null_level`.
///
/// Segments are emitted up to the last non-empty segment
/// or up to the segment at index `null_level`, whichever comes later.
/// A `null_level` of zero therefore never emits trailing separators,
/// while `segments.len() - 1` emits every one of them.
///
/// The null level must be a valid segment index.
/// Greater levels are treated as the last segment boundary.
///
/// # Example
///
/// ```
/// # use dicom_value_core::value::render::render_with_separators;
/// let segments = ["Potter", "Harry", "", "", ""];
/// assert_eq!(render_with_separators(&segments, '^', 0), "Potter^Harry");
/// assert_eq!(render_with_separators(&segments, '^', 2), "Potter^Harry^");
/// assert_eq!(render_with_separators(&segments, '^', 4), "Potter^Harry^^^");
/// ```
pub fn render_with_separators<S>(segments: &[S], separator: char, null_level: usize) -> String
where
    S: AsRef<str>,
{
    if segments.is_empty() {
        return String::new();
    }
    debug_assert!(
        null_level < segments.len(),
        "null level {} out of range for {} segments",
        null_level,
        segments.len()
    );
    let null_level = null_level.min(segments.len() - 1);

    let last_present = segments
        .iter()
        .rposition(|s| !s.as_ref().is_empty())
        .unwrap_or(0);
    let end = last_present.max(null_level);

    let mut out = String::new();
    for (i, segment) in segments[..=end].iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(segment.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_with_separators;

    #[test]
    fn no_null_level_drops_trailing_emptiness() {
        assert_eq!(render_with_separators(&["a", "b", "", ""], '^', 0), "a^b");
        assert_eq!(render_with_separators(&["", "", ""], '=', 0), "");
        assert_eq!(render_with_separators(&["a", "", "c"], '^', 0), "a^^c");
    }

    #[test]
    fn null_level_forces_separators() {
        assert_eq!(render_with_separators(&["a", "", ""], '=', 1), "a=");
        assert_eq!(render_with_separators(&["a", "", ""], '=', 2), "a==");
        assert_eq!(render_with_separators(&["", "", ""], '=', 2), "==");
        assert_eq!(render_with_separators(&["", "", "", "", ""], '^', 4), "^^^^");
    }

    #[test]
    fn null_level_below_content_has_no_effect() {
        assert_eq!(render_with_separators(&["a", "b", "c"], '^', 1), "a^b^c");
        assert_eq!(render_with_separators(&["", "b", ""], '^', 0), "^b");
    }

    #[test]
    fn no_segments_render_nothing() {
        let segments: [&str; 0] = [];
        assert_eq!(render_with_separators(&segments, '^', 0), "");
    }

    #[test]
    fn owned_segments_are_accepted() {
        let segments = vec!["Doe".to_string(), String::new()];
        assert_eq!(render_with_separators(&segments, '^', 1), "Doe^");
    }
}
