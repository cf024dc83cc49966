//! Welcome banner for each screen in line mode.

use console::style;
use mindcare_core::script::{self, landing};
use mindcare_types::screen::Screen;

/// Banner printed when a screen is entered.
///
/// Chat screens show their title, the disclaimer or profile, and a hint about
/// slash commands. The landing screen shows the service options.
pub fn welcome_banner(screen: Screen) -> String {
    let mut out = String::from("\n");
    match screen {
        Screen::Landing => {
            out.push_str(&format!("  {}\n", style(landing::HEADLINE).cyan().bold()));
            out.push_str(&format!("  {}\n\n", style(landing::TAGLINE).dim()));
            out.push_str(&format!("  {}\n", style(landing::SERVICES_HEADING).bold()));
            for option in &landing::SERVICE_OPTIONS {
                let command = match option.target {
                    Screen::ExpertChat => "/expert",
                    _ => "/bot",
                };
                out.push_str(&format!(
                    "    {}  {}  {}\n",
                    style("*").cyan(),
                    style(option.title).bold(),
                    style(format!("({command})")).yellow()
                ));
                out.push_str(&format!("       {}\n", style(option.features.join(" · ")).dim()));
            }
            out.push('\n');
            out.push_str(&format!("  {}\n", style(landing::IMPORTANT_NOTICE).dim()));
            for line in landing::CRISIS_LINES {
                out.push_str(&format!("  {}\n", style(line).red()));
            }
        }
        Screen::Chatbot => {
            out.push_str(&format!("  🧠 {}\n", style(screen.title()).cyan().bold()));
            out.push_str(&format!("  {}\n", style(script::CHATBOT_DISCLAIMER).dim()));
        }
        Screen::ExpertChat => {
            let profile = script::EXPERT_PROFILE;
            out.push_str(&format!("  🩺 {}\n", style(screen.title()).magenta().bold()));
            out.push_str(&format!(
                "  {}  {}\n",
                style(profile.name).bold(),
                style(profile.title).dim()
            ));
            out.push_str(&format!(
                "  {} {}  {}\n",
                style("●").green(),
                style(profile.availability).green(),
                style(profile.response_time).dim()
            ));
            out.push_str(&format!(
                "  {}  {}\n",
                style(profile.credential).dim(),
                style(profile.experience).dim()
            ));
            out.push_str(&format!("  {}\n", style(script::EXPERT_NOTICE).dim()));
        }
    }
    out.push('\n');
    out.push_str(&format!(
        "  {}\n",
        style("Type /help for commands, Ctrl+D to exit").dim()
    ));
    out.push_str(&format!("  {}\n", style("---").dim()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(screen: Screen) -> String {
        console::strip_ansi_codes(&welcome_banner(screen)).to_string()
    }

    #[test]
    fn landing_banner_offers_both_services() {
        let banner = plain(Screen::Landing);
        assert!(banner.contains(landing::HEADLINE));
        assert!(banner.contains("/bot"));
        assert!(banner.contains("/expert"));
        assert!(banner.contains(landing::CRISIS_LINES[0]));
    }

    #[test]
    fn chat_banners_carry_their_notices() {
        assert!(plain(Screen::Chatbot).contains(script::CHATBOT_DISCLAIMER));
        let expert = plain(Screen::ExpertChat);
        assert!(expert.contains(script::EXPERT_PROFILE.name));
        assert!(expert.contains(script::EXPERT_NOTICE));
    }
}
