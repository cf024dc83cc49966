//! Landing screen copy.

use mindcare_types::screen::Screen;

pub const HEADLINE: &str = "Your Mental Health Companion";

pub const TAGLINE: &str = "A safe and supportive space to share, relax, and take care of your mental well-being anytime.";

/// A highlighted value proposition.
#[derive(Debug, Clone, Copy)]
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUE_CARDS: [ValueCard; 3] = [
    ValueCard {
        title: "24/7 Emotional Support",
        description: "Get instant support anytime through our AI chatbot or schedule sessions with mental health experts",
    },
    ValueCard {
        title: "Privacy & Anonymous Conversations",
        description: "Your conversations are completely confidential and secure. No login required for chatbot support",
    },
    ValueCard {
        title: "Support for All Age Groups",
        description: "Tailored support for teenagers, adults, and seniors with personalized care approaches",
    },
];

/// A support option with its call to action.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOption {
    pub title: &'static str,
    pub features: [&'static str; 4],
    pub call_to_action: &'static str,
    pub target: Screen,
}

pub const SERVICES_HEADING: &str = "Choose Your Support Option";

pub const SERVICE_OPTIONS: [ServiceOption; 2] = [
    ServiceOption {
        title: "AI Chatbot Support",
        features: [
            "Instant responses 24/7",
            "Emotion-based guidance",
            "Breathing exercises & tips",
            "Completely free and anonymous",
        ],
        call_to_action: "Start Chatbot",
        target: Screen::Chatbot,
    },
    ServiceOption {
        title: "Expert Mental Health Consultation",
        features: [
            "Licensed professionals",
            "Personalized guidance",
            "Confidential conversations",
            "Professional support",
        ],
        call_to_action: "Chat with Expert",
        target: Screen::ExpertChat,
    },
];

pub const IMPORTANT_NOTICE: &str = "MindCare provides emotional support and companionship. Our services do not replace professional mental health care or medical services. In case of emergency, please contact emergency services immediately.";

pub const CRISIS_LINES: [&str; 2] = [
    "Crisis Support: National Suicide Prevention Lifeline: 1-800-273-8255",
    "Crisis Text Line: Text HOME to 741741",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_options_lead_to_chat_screens() {
        let targets: Vec<Screen> = SERVICE_OPTIONS.iter().map(|s| s.target).collect();
        assert_eq!(targets, vec![Screen::Chatbot, Screen::ExpertChat]);
        assert!(targets.iter().all(Screen::is_chat));
    }
}
