//! Text field model shared by both chat screens.

/// Editable input line.
///
/// The send action is enabled only while the trimmed content is non-empty.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Remove the last character (backspace).
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Hand out the verbatim text and clear the field.
    ///
    /// Returns `None` (leaving the field untouched) when sending is disabled.
    pub fn take(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_disables_send() {
        let mut input = InputBuffer::new();
        assert!(!input.can_send());
        input.push_str("   \t ");
        assert!(!input.can_send());
        assert_eq!(input.take(), None);
        assert_eq!(input.as_str(), "   \t ");
    }

    #[test]
    fn test_take_returns_verbatim_and_clears() {
        let mut input = InputBuffer::new();
        input.push_str(" I feel tired ");
        assert!(input.can_send());
        assert_eq!(input.take().as_deref(), Some(" I feel tired "));
        assert!(input.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut input = InputBuffer::new();
        input.push('h');
        input.push('i');
        assert_eq!(input.pop(), Some('i'));
        assert_eq!(input.as_str(), "h");
        input.clear();
        assert_eq!(input.pop(), None);
    }
}
