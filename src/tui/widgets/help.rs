//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect) {
        // Centered, 60% width, 50% height
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.5) as u16;
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let shortcut = |key: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(key, Style::default().fg(Color::Yellow)),
                Span::raw(text),
            ])
        };

        let help_text = vec![
            Line::from(Span::styled(
                "Summarizer Shortcuts",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            shortcut("Enter", "   Summarize the URL"),
            shortcut("Bksp", "    Delete last character"),
            shortcut("Del", "     Clear the URL"),
            shortcut("F1", "      Show this help"),
            shortcut("Esc", "     Quit application"),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
