//! The top-bar search field.
//!
//! The field holds text and focus and nothing else. Submitting it is
//! accepted and ignored: the destination list is never filtered.

/// Placeholder shown while the field is empty.
pub const SEARCH_PLACEHOLDER: &str = "Cari tempat wisata";

/// Single-line text input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchField {
    text: String,
    focused: bool,
}

impl SearchField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub const fn focus(&mut self) {
        self.focused = true;
    }

    pub const fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the whole text, as each keystroke does.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text after appending `c`, without mutating the field.
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.text.clone();
        next.push(c);
        next
    }

    /// Text after deleting the last character, without mutating the field.
    pub fn without_last_char(&self) -> String {
        let mut next = self.text.clone();
        next.pop();
        next
    }

    /// Submit the current text.
    pub fn submit(&self) {
        tracing::debug!(query = %self.text, "search submitted; list filtering is not available");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty_and_unfocused() {
        let field = SearchField::new();
        assert_eq!(field.text(), "");
        assert!(!field.is_focused());
    }

    #[test]
    fn test_set_text_replaces_whole_value() {
        let mut field = SearchField::new();
        field.set_text("jog");
        field.set_text("jogja");
        assert_eq!(field.text(), "jogja");
    }

    #[test]
    fn test_char_helpers_do_not_mutate() {
        let mut field = SearchField::new();
        field.set_text("tugu");
        assert_eq!(field.with_char('!'), "tugu!");
        assert_eq!(field.without_last_char(), "tug");
        assert_eq!(field.text(), "tugu");
    }

    #[test]
    fn test_without_last_char_on_empty_is_empty() {
        assert_eq!(SearchField::new().without_last_char(), "");
    }

    #[test]
    fn test_without_last_char_handles_multibyte() {
        let mut field = SearchField::new();
        field.set_text("café");
        assert_eq!(field.without_last_char(), "caf");
    }

    #[test]
    fn test_submit_leaves_field_unchanged() {
        let mut field = SearchField::new();
        field.set_text("prambanan");
        field.focus();
        let before = field.clone();
        field.submit();
        assert_eq!(field, before);
    }

    #[test]
    fn test_focus_toggles() {
        let mut field = SearchField::new();
        field.focus();
        assert!(field.is_focused());
        field.blur();
        assert!(!field.is_focused());
    }
}
