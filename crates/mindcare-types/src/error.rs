use thiserror::Error;

use crate::script::QuickReplySet;

/// Errors from chat session operations.
///
/// The full-screen interface never shows these: it disables the
/// corresponding controls instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("message text is empty")]
    EmptyInput,

    #[error("{0} quick replies are not currently offered")]
    QuickReplyHidden(QuickReplySet),

    #[error("invalid emotion: '{0}'")]
    InvalidEmotion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyInput.to_string(), "message text is empty");
        assert_eq!(
            ChatError::QuickReplyHidden(QuickReplySet::FollowUps).to_string(),
            "follow-up quick replies are not currently offered"
        );
        assert_eq!(
            ChatError::InvalidEmotion("meh".to_string()).to_string(),
            "invalid emotion: 'meh'"
        );
    }
}
