//! Drawing for the full-screen interface.
//!
//! Layout: navigation bar, screen body, footer. Chat bodies stack the
//! message list, the quick-reply panel (chatbot only, when offered) and the
//! input field.

use mindcare_core::script::{self, landing};
use mindcare_types::message::{Message, Sender};
use mindcare_types::screen::{Screen, NAV_ITEMS};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::state::TuiState;
use crate::cli::chat::renderer::sender_label;

pub fn draw(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // nav bar
            Constraint::Min(8),    // body
            Constraint::Length(3), // footer
        ])
        .split(area);

    draw_nav(frame, main_layout[0], state);
    if state.screen().is_chat() {
        draw_chat(frame, main_layout[1], state);
    } else {
        draw_landing(frame, main_layout[1], state);
    }
    draw_footer(frame, main_layout[2], state);
}

fn border() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

// ---------------------------------------------------------------------------
// Navigation bar and footer
// ---------------------------------------------------------------------------

fn draw_nav(frame: &mut Frame, area: Rect, state: &TuiState) {
    let current = state.screen();
    let mut spans = vec![
        Span::styled(" MindCare ", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
    ];
    // Support shares the landing screen, so only the first match lights up.
    let active = NAV_ITEMS.iter().position(|item| item.is_active(current));
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let style = if active == Some(i) {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, item.label), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(border()), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &TuiState) {
    let hints = match state.screen() {
        Screen::Landing => "←/→ choose  Enter open  F1-F4 navigate  Esc/q quit",
        Screen::Chatbot => "Enter send  ↑/↓ quick replies  Enter on empty field picks  Esc home",
        Screen::ExpertChat => "Enter send  Esc home  Ctrl+C quit",
    };
    let footer = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
        .block(border());
    frame.render_widget(footer, area);
}

// ---------------------------------------------------------------------------
// Landing
// ---------------------------------------------------------------------------

fn draw_landing(frame: &mut Frame, area: Rect, state: &TuiState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // hero
            Constraint::Length(5), // value cards
            Constraint::Min(8),    // services
            Constraint::Length(6), // notice
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            landing::HEADLINE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(landing::TAGLINE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().padding(ratatui::widgets::Padding::top(1)));
    frame.render_widget(hero, layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(layout[1]);
    for (card, area) in landing::VALUE_CARDS.iter().zip(cards.iter()) {
        let widget = Paragraph::new(Span::styled(card.description, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .block(border().title(Span::styled(
                format!(" {} ", card.title),
                Style::default().fg(Color::White).bold(),
            )));
        frame.render_widget(widget, *area);
    }

    let services = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);
    for (i, (option, area)) in landing::SERVICE_OPTIONS.iter().zip(services.iter()).enumerate() {
        let selected = i == state.landing_choice;
        let mut lines: Vec<Line> = option
            .features
            .iter()
            .map(|feature| {
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::raw(*feature),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        let cta_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(Span::styled(
            format!(" [ {} ] ", option.call_to_action),
            cta_style,
        )));

        let border_color = if selected { Color::Cyan } else { Color::DarkGray };
        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", option.title),
                    Style::default().fg(Color::White).bold(),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(widget, *area);
    }

    let mut notice = vec![Line::from(Span::styled(
        landing::IMPORTANT_NOTICE,
        Style::default().fg(Color::Yellow),
    ))];
    for line in landing::CRISIS_LINES {
        notice.push(Line::from(Span::styled(line, Style::default().fg(Color::Red))));
    }
    let notice = Paragraph::new(notice)
        .wrap(Wrap { trim: true })
        .block(border().title(" Important Notice "));
    frame.render_widget(notice, layout[3]);
}

// ---------------------------------------------------------------------------
// Chat screens
// ---------------------------------------------------------------------------

fn draw_chat(frame: &mut Frame, area: Rect, state: &TuiState) {
    let screen = state.screen();
    let quick_replies = state.quick_replies();
    let header_height = if screen == Screen::ExpertChat { 5 } else { 4 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(if quick_replies.is_some() { 3 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(area);

    draw_chat_header(frame, layout[0], screen);
    draw_messages(frame, layout[1], state);
    if quick_replies.is_some() {
        draw_quick_replies(frame, layout[2], state);
    }
    draw_input(frame, layout[3], state);
}

fn draw_chat_header(frame: &mut Frame, area: Rect, screen: Screen) {
    let lines = match screen {
        Screen::ExpertChat => {
            let profile = script::EXPERT_PROFILE;
            vec![
                Line::from(vec![
                    Span::styled(profile.name, Style::default().fg(Color::Magenta).bold()),
                    Span::raw("  "),
                    Span::styled(profile.title, Style::default().fg(Color::Gray)),
                ]),
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::styled(profile.availability, Style::default().fg(Color::Green)),
                    Span::raw("  "),
                    Span::styled(profile.response_time, Style::default().fg(Color::DarkGray)),
                ]),
                Line::from(Span::styled(
                    format!("{}  ·  {}", profile.credential, profile.experience),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        _ => vec![
            Line::from(Span::styled(
                "Your supportive mental health companion",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                script::CHATBOT_DISCLAIMER,
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };
    let title_color = if screen == Screen::ExpertChat { Color::Magenta } else { Color::Cyan };
    let header = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        border().title(Span::styled(
            format!(" {} ", screen.title()),
            Style::default().fg(title_color).bold(),
        )),
    );
    frame.render_widget(header, area);
}

fn draw_messages(frame: &mut Frame, area: Rect, state: &TuiState) {
    let Some(conversation) = state.router.conversation() else {
        return;
    };
    let width = usize::from(area.width.saturating_sub(4)).max(10);

    let mut items: Vec<ListItem> = conversation
        .messages()
        .iter()
        .map(|message| message_item(message, &state.time_format, width))
        .collect();

    if state.typing() {
        let who = match state.screen() {
            Screen::ExpertChat => script::EXPERT_PROFILE.name,
            _ => "MindCare",
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{who} is typing…"),
            Style::default().fg(Color::DarkGray).italic(),
        ))));
    }

    // Selecting the last item keeps the list scrolled to the bottom.
    let mut list_state = ListState::default();
    list_state.select(items.len().checked_sub(1));

    let list = List::new(items).block(border().title(" Conversation "));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn message_item(message: &Message, time_format: &str, width: usize) -> ListItem<'static> {
    let color = match message.sender {
        Sender::User => Color::Green,
        Sender::Bot => Color::Cyan,
        Sender::Expert => Color::Magenta,
    };
    let label = sender_label(message.sender);

    let mut lines = vec![Line::from(vec![
        Span::styled(label, Style::default().fg(color).bold()),
        Span::raw("  "),
        Span::styled(
            message.display_time(time_format),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    for line in wrap_text(&message.text, width) {
        lines.push(Line::raw(format!("  {line}")));
    }
    // The user's own messages sit on the right.
    if message.sender.is_user() {
        lines = lines.into_iter().map(Line::right_aligned).collect();
    }
    lines.push(Line::raw(""));
    ListItem::new(lines)
}

fn draw_quick_replies(frame: &mut Frame, area: Rect, state: &TuiState) {
    let (Some(set), Some(highlighted)) = (state.quick_replies(), state.highlighted_quick_reply())
    else {
        return;
    };

    let mut spans = Vec::new();
    for (i, label) in set.labels().into_iter().enumerate() {
        let style = if i == highlighted {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw("  "));
    }

    let panel = Paragraph::new(Line::from(spans)).block(border().title(Span::styled(
        format!(" {} ", set.prompt()),
        Style::default().fg(Color::White).bold(),
    )));
    frame.render_widget(panel, area);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &TuiState) {
    let placeholder = match state.screen() {
        Screen::ExpertChat => "Type your message to the expert...",
        _ => "Type your message...",
    };
    let content = if state.input.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.input.as_str().to_string(), Style::default().fg(Color::White))
    };

    // The send hint doubles as the enabled/disabled state of the send action.
    let send = if state.input.can_send() {
        Span::styled(" Send ⏎ ", Style::default().fg(Color::Black).bg(Color::Green).bold())
    } else {
        Span::styled(" Send ", Style::default().fg(Color::DarkGray))
    };

    let input = Paragraph::new(Line::from(content)).block(
        border()
            .title(" Message ")
            .title_bottom(Line::from(send).right_aligned()),
    );
    frame.render_widget(input, area);

    let typed = u16::try_from(state.input.as_str().chars().count()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2));
    frame.set_cursor_position((x, area.y + 1));
}

/// Greedy word wrap on character counts. Explicit newlines are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }
        out.push(line);
    }
    out
}
