use chrono::{DateTime, Local};

use crate::{
    error::RecommendError,
    recommend::Recommendation,
    spotify::search::TrackRecord,
};

pub const GREETING: &str = "Ask me to suggest you some songs!";
pub const RESULTS_INTRO: &str = "Here are some songs for you:";
pub const NO_RESULTS: &str = "No recommendations found. Please try a different query.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Local>,
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage { speaker: Speaker::User, text: text.into(), at: Local::now(), is_error: false }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        ChatMessage { speaker: Speaker::Bot, text: text.into(), at: Local::now(), is_error: false }
    }

    pub fn bot_error(text: impl Into<String>) -> Self {
        ChatMessage { is_error: true, ..ChatMessage::bot(text) }
    }

    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    pub remaining_ticks: u8,
    pub is_error: bool,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 30, is_error: false }
    }
    pub fn error(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 40, is_error: true }
    }
}

pub struct AppState {
    pub focus: Focus,
    pub input: String,
    pub transcript: Vec<ChatMessage>,
    pub results: Vec<TrackRecord>,
    pub selected: usize,
    /// Summary of the last interpreted request and the query actually sent.
    pub last_dispatch: Option<(String, String)>,
    /// Submitted text waiting for the dispatcher.
    pub pending_query: Option<String>,
    pub is_loading: bool,
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            focus: Focus::Input,
            input: String::new(),
            transcript: vec![ChatMessage::bot(GREETING)],
            results: Vec::new(),
            selected: 0,
            last_dispatch: None,
            pending_query: None,
            is_loading: false,
            notification: None,
            show_help: false,
            should_quit: false,
            tick: 0,
        }
    }
}

impl AppState {
    /// Move the input line into the transcript and queue it for dispatch.
    ///
    /// Blank input is still queued so the dispatcher answers it with the
    /// prompt-for-input message, but it is not echoed as a user message.
    pub fn submit_input(&mut self) {
        let query = std::mem::take(&mut self.input);
        if !query.trim().is_empty() {
            self.transcript.push(ChatMessage::user(query.clone()));
        }
        self.pending_query = Some(query);
        self.is_loading = true;
    }

    pub fn apply_outcome(&mut self, outcome: Result<Recommendation, RecommendError>) {
        self.is_loading = false;
        match outcome {
            Ok(rec) => {
                self.last_dispatch = Some((rec.intent.to_string(), rec.search_query));
                self.selected = 0;
                if rec.tracks.is_empty() {
                    self.results.clear();
                    self.transcript.push(ChatMessage::bot(NO_RESULTS));
                    self.set_notification(Notification::info("No tracks found"));
                } else {
                    self.transcript.push(ChatMessage::bot(RESULTS_INTRO));
                    self.set_notification(Notification::info(format!("Found {} tracks", rec.tracks.len())));
                    self.results = rec.tracks;
                    self.focus = Focus::Results;
                }
            }
            Err(e) => {
                // The status line must not describe the previous request.
                self.last_dispatch = None;
                let msg = e.user_message();
                self.transcript.push(ChatMessage::bot_error(msg));
                self.set_notification(Notification::error(msg));
            }
        }
    }

    pub fn selected_track(&self) -> Option<&TrackRecord> {
        self.results.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let max = self.results.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn set_notification(&mut self, n: Notification) {
        self.notification = Some(n);
    }

    pub fn tick_notification(&mut self) {
        if let Some(ref mut n) = self.notification {
            if n.remaining_ticks > 0 {
                n.remaining_ticks -= 1;
            } else {
                self.notification = None;
            }
        }
    }

    pub fn cursor_visible(&self) -> bool {
        (self.tick / 5) % 2 == 0
    }
}
