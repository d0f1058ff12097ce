//! Typing-effect headline timing

use std::time::Duration;

/// Wait after launch before the first character appears
pub const TYPING_START_DELAY: Duration = Duration::from_millis(1000);

/// Time per typed character
pub const TYPING_SPEED: Duration = Duration::from_millis(200);

/// How long the cursor keeps blinking after typing finishes
pub const CURSOR_LINGER: Duration = Duration::from_millis(2000);

/// First `chars` characters of `text`, on a char boundary
///
/// # Examples
/// ```
/// use itsatui::logic::typing::typed_prefix;
///
/// assert_eq!(typed_prefix("ITSA SJCEM", 4), "ITSA");
/// assert_eq!(typed_prefix("ITSA", 10), "ITSA");
/// assert_eq!(typed_prefix("ITSA", 0), "");
/// ```
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_prefix_multibyte() {
        assert_eq!(typed_prefix("héllo", 2), "hé");
        assert_eq!(typed_prefix("◆◆◆", 1), "◆");
    }
}
