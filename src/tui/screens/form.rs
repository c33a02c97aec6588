//! Form screen - URL input and summary result

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::app::FormStatus;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Form screen state
#[derive(Default)]
pub struct FormScreen;

impl FormScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        input: &str,
        status: &FormStatus,
        spinner_tick: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Intro
                Constraint::Length(3), // URL input
                Constraint::Min(5),    // Result
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let title = Paragraph::new("AI Article Summarizer")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let intro = Paragraph::new(
            "Enter a blog/news URL and get a concise summary powered by Groq.",
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        frame.render_widget(intro, chunks[1]);

        let running = matches!(status, FormStatus::Running(_));
        let input_style = if running {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let cursor = if running { "" } else { "█" };
        let url = Paragraph::new(format!("{}{}", input, cursor))
            .style(input_style)
            .block(
                Block::default()
                    .title(" Article URL ")
                    .borders(Borders::ALL),
            );
        frame.render_widget(url, chunks[2]);

        frame.render_widget(result_panel(status, spinner_tick), chunks[3]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" [Enter] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Summarize  "),
            Span::styled(" [F1] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" [Esc] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }
}

fn result_panel(status: &FormStatus, spinner_tick: usize) -> Paragraph<'static> {
    let (title, color, lines) = match status {
        FormStatus::Idle => (
            " Summary ",
            Color::DarkGray,
            vec![Line::from(Span::styled(
                "Type a URL and press [Enter]",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        FormStatus::Running(stage) => {
            let frame = SPINNER_FRAMES[spinner_tick % SPINNER_FRAMES.len()];
            (
                " Working ",
                Color::Yellow,
                vec![Line::from(vec![
                    Span::styled(format!("{} ", frame), Style::default().fg(Color::Yellow)),
                    Span::raw(stage.label()),
                ])],
            )
        }
        FormStatus::Success(digest) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    "Summary:",
                    Style::default().fg(Color::Green).bold(),
                )),
                Line::from(""),
            ];
            lines.extend(digest.summary.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("({} characters of article text)", digest.article_chars),
                Style::default().fg(Color::DarkGray),
            )));
            (" Summary ", Color::Green, lines)
        }
        FormStatus::Warning(message) => (
            " Warning ",
            Color::Yellow,
            vec![Line::from(Span::styled(
                format!("⚠ {}", message),
                Style::default().fg(Color::Yellow),
            ))],
        ),
        FormStatus::Failed { headline, detail } => (
            " Error ",
            Color::Red,
            vec![
                Line::from(Span::styled(
                    format!("✗ {}", headline),
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    detail.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ],
        ),
    };

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}
