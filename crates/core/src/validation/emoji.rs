//! Emoji detection for the no-emoji constraint.

use unicode_segmentation::UnicodeSegmentation;

/// Returns `true` if any grapheme cluster in `value` is an emoji.
///
/// Clusters are looked up whole first (ZWJ sequences, flags, skin tones)
/// and then scalar by scalar, so an emoji glued to combining marks is still
/// caught.
pub fn contains_emoji(value: &str) -> bool {
    value.graphemes(true).any(|grapheme| {
        emojis::get(grapheme).is_some()
            || grapheme.chars().any(|c| {
                let mut buf = [0u8; 4];
                emojis::get(c.encode_utf8(&mut buf)).is_some()
            })
    })
}

/// No-emoji rule: blank input passes, otherwise no cluster may be an emoji.
pub fn is_emoji_free(value: &str) -> bool {
    value.is_empty() || !contains_emoji(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_emoji_free() {
        assert!(is_emoji_free("contact-0001"));
        assert!(is_emoji_free("연락처 123"));
    }

    #[test]
    fn empty_value_passes() {
        assert!(is_emoji_free(""));
    }

    #[test]
    fn single_emoji_is_detected() {
        assert!(!is_emoji_free("hello 😀"));
        assert!(!is_emoji_free("🚀"));
    }

    #[test]
    fn compound_emoji_is_detected() {
        // Family ZWJ sequence and a regional-indicator flag.
        assert!(contains_emoji("👨‍👩‍👧"));
        assert!(contains_emoji("id-🇰🇷"));
    }

    #[test]
    fn digits_alone_are_not_keycaps() {
        assert!(!contains_emoji("0123456789#*"));
    }
}
