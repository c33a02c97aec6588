//! Main TUI application state and logic

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

use crate::pipeline::{Digest, Pipeline, PipelineError, Stage};
use crate::tui::screens::FormScreen;
use crate::tui::widgets::HelpPopup;

pub const CONTENT_FAILURE_HEADLINE: &str =
    "Could not fetch enough article content. Please try another link.";
pub const SUMMARY_FAILURE_HEADLINE: &str = "Summarization failed.";

/// What the result panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Running(Stage),
    Success(Digest),
    Warning(String),
    Failed { headline: String, detail: String },
}

/// Messages sent from the in-flight run back to the UI loop
#[derive(Debug)]
enum RunEvent {
    Stage(Stage),
    Finished(Result<Digest, PipelineError>),
}

/// Main application state
pub struct App {
    pipeline: Arc<Pipeline>,
    input: String,
    status: FormStatus,
    show_help: bool,
    spinner_tick: usize,
    run_events: Option<UnboundedReceiver<RunEvent>>,
    form: FormScreen,
}

impl App {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            input: String::new(),
            status: FormStatus::Idle,
            show_help: false,
            spinner_tick: 0,
            run_events: None,
            form: FormScreen::new(),
        }
    }

    /// Draw the form
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        self.form
            .draw(frame, area, &self.input, &self.status, self.spinner_tick);

        if self.show_help {
            HelpPopup::draw(frame, area);
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Delete => self.input.clear(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    /// Start a pipeline run for the current input
    pub fn submit(&mut self) {
        if self.is_running() {
            return;
        }

        let url = self.input.trim().to_string();
        if url.is_empty() {
            self.finish(Err(PipelineError::EmptyUrl));
            return;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let pipeline = Arc::clone(&self.pipeline);

        tokio::spawn(async move {
            let progress = tx.clone();
            let result = pipeline
                .run_with_progress(&url, move |stage| {
                    let _ = progress.send(RunEvent::Stage(stage));
                })
                .await;
            let _ = tx.send(RunEvent::Finished(result));
        });

        self.status = FormStatus::Running(Stage::Fetching);
        self.run_events = Some(rx);
    }

    /// Advance the spinner and drain events from the in-flight run
    pub fn update(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);

        let Some(rx) = self.run_events.as_mut() else {
            return;
        };

        loop {
            match rx.try_recv() {
                Ok(RunEvent::Stage(stage)) => self.status = FormStatus::Running(stage),
                Ok(RunEvent::Finished(result)) => {
                    self.run_events = None;
                    self.finish(result);
                    return;
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.run_events = None;
                    self.status = FormStatus::Failed {
                        headline: SUMMARY_FAILURE_HEADLINE.to_string(),
                        detail: "Error: the summarizer task stopped unexpectedly".to_string(),
                    };
                    return;
                }
            }
        }
    }

    fn finish(&mut self, result: Result<Digest, PipelineError>) {
        self.status = match result {
            Ok(digest) => FormStatus::Success(digest),
            Err(PipelineError::EmptyUrl) => FormStatus::Warning(PipelineError::EmptyUrl.to_string()),
            Err(e) if e.is_content_failure() => FormStatus::Failed {
                headline: CONTENT_FAILURE_HEADLINE.to_string(),
                detail: e.to_string(),
            },
            Err(e) => FormStatus::Failed {
                headline: SUMMARY_FAILURE_HEADLINE.to_string(),
                detail: e.to_string(),
            },
        };
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, FormStatus::Running(_))
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
