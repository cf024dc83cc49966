//! Scripted dialogue tables.
//!
//! Every response is a fixed string chosen by exhaustive `match` over the
//! closed quick-reply enums from `mindcare_types::script`. Lookups keyed by a
//! free-form label have an explicit fallback.

pub mod landing;

use mindcare_types::script::{Emotion, FollowUpOption};

/// Opening message of a fresh chatbot session.
pub const CHATBOT_GREETING: &str = "Hi, I'm MindCare. How are you feeling today?";

/// Opening message of a fresh expert session.
pub const EXPERT_GREETING: &str = "Hello! I'm Dr. Anna, a licensed psychology specialist. I'm here to provide you with professional guidance and support. How can I help you today?";

/// The chatbot's answer to any free-text message. Identical every time.
pub const ACKNOWLEDGEMENT: &str = "Thank you for sharing that with me. I hear you, and your feelings are important. Remember, you're taking a positive step by talking about how you feel. Is there anything specific you'd like help with today?";

/// Answer to a follow-up label that is not one of the offered options.
pub const FOLLOW_UP_FALLBACK: &str = "Thank you for sharing. How else can I support you today?";

/// Replies the expert picks from, uniformly at random.
pub const EXPERT_RESPONSES: [&str; 4] = [
    "Thank you for sharing that with me. I understand how challenging this must be for you. Let's explore this together. Can you tell me more about when these feelings started?",
    "I appreciate your openness. What you're experiencing is valid, and it's important that you're seeking support. Let me help you work through this step by step.",
    "That's a very common concern, and you're not alone in feeling this way. From a professional perspective, there are several approaches we can explore together. What would you like to focus on first?",
    "I hear you, and I want you to know that seeking help is a sign of strength. Let's work on some strategies that can help you manage these feelings. Have you tried any coping techniques before?",
];

/// Disclaimer shown under the chatbot conversation.
pub const CHATBOT_DISCLAIMER: &str =
    "This chatbot provides emotional support and does not replace professional care.";

/// Notice shown under the expert conversation.
pub const EXPERT_NOTICE: &str = "Confidential: Conversations are confidential. This service provides guidance and support, not medical diagnosis.";

/// The user message sent when an emotion button is pressed.
pub fn emotion_utterance(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "I'm feeling happy!",
        Emotion::Stressed => "I'm feeling stressed",
        Emotion::Sad => "I'm feeling sad",
        Emotion::Angry => "I'm feeling angry",
    }
}

/// The bot's answer to an emotion pick.
pub fn emotion_response(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "That's wonderful to hear! 😊 I'm so glad you're feeling positive today. What's bringing you joy?",
        Emotion::Stressed => "I understand that stress can be overwhelming. You're not alone in this. Would you like to try a breathing exercise, or would you prefer to talk about what's on your mind?",
        Emotion::Sad => "I'm here for you. Your feelings are valid, and it's okay to feel sad sometimes. Would you like to share what's bothering you? I'm listening.",
        Emotion::Angry => "It's completely natural to feel angry. Let's work through this together. Would you like to talk about it or try some calming techniques?",
    }
}

/// The bot's answer to a follow-up option.
pub fn follow_up_script(option: FollowUpOption) -> &'static str {
    match option {
        FollowUpOption::BreathingExercise => "Great choice! Let's practice together:\n\n🌬️ Box Breathing Technique:\n1. Breathe in slowly for 4 seconds\n2. Hold your breath for 4 seconds\n3. Exhale slowly for 4 seconds\n4. Hold for 4 seconds\n5. Repeat 3-5 times\n\nTake your time. How do you feel now?",
        FollowUpOption::TalkAboutFeelings => "I'm here to listen without judgment. This is a safe space for you. Take your time and share whatever is on your mind. What would you like to talk about?",
        FollowUpOption::DailyMotivation => "Here's something to inspire you:\n\n✨ 'You are stronger than you know. Every step forward, no matter how small, is progress. Be proud of yourself.'\n\n💪 Remember: It's okay to have difficult days. What matters is that you're here, and you're trying. That takes courage.",
    }
}

/// Look up a follow-up answer by label, falling back to [`FOLLOW_UP_FALLBACK`].
pub fn follow_up_response(label: &str) -> &'static str {
    match FollowUpOption::from_label(label) {
        Some(option) => follow_up_script(option),
        None => FOLLOW_UP_FALLBACK,
    }
}

/// The expert's profile card.
#[derive(Debug, Clone, Copy)]
pub struct ExpertProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub availability: &'static str,
    pub response_time: &'static str,
    pub credential: &'static str,
    pub experience: &'static str,
}

pub const EXPERT_PROFILE: ExpertProfile = ExpertProfile {
    name: "Dr. Anna",
    title: "Psychology Specialist",
    availability: "Available",
    response_time: "Response time: ~2 min",
    credential: "Licensed Professional",
    experience: "15+ Years Experience",
};
