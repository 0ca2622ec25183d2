pub mod state;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Duration;
use tokio::time;
use tracing::{info, warn};

use crate::{
    app::state::{AppState, Focus, Notification},
    events::{map_key_to_action, UserAction},
    recommend::Recommender,
};

const TICK_MS: u64 = 100; // cursor blink + toast countdown

pub struct App {
    pub state: AppState,
    recommender: Recommender,
}

impl App {
    pub fn new(recommender: Recommender) -> Self {
        App {
            state: AppState::default(),
            recommender,
        }
    }

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        let mut tick_interval = time::interval(Duration::from_millis(TICK_MS));
        let mut event_stream = EventStream::new();

        loop {
            terminal.draw(|f| crate::ui::render(f, &self.state))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                    self.state.tick_notification();
                }
                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        let input_focused = self.state.focus == Focus::Input && !self.state.show_help;
                        if let Some(action) = map_key_to_action(key, input_focused) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            // One request at a time: show the loading state, then block on it.
            if let Some(query) = self.state.pending_query.take() {
                terminal.draw(|f| crate::ui::render(f, &self.state))?;
                self.recommend(&query).await;
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub async fn recommend(&mut self, query: &str) {
        info!("Recommendation requested");
        let outcome = self.recommender.interpret_and_search(query).await;
        self.state.apply_outcome(outcome);
    }

    // ── Action handler ────────────────────────────────────────────────────────
    pub fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Quit => {
                self.state.should_quit = true;
            }
            UserAction::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
            }
            UserAction::NavigateUp => self.state.select_prev(),
            UserAction::NavigateDown => self.state.select_next(),
            UserAction::OpenTrack => self.open_selected(),
            UserAction::FocusInput => {
                if self.state.show_help {
                    self.state.show_help = false;
                } else {
                    self.state.focus = Focus::Input;
                }
            }
            UserAction::FocusResults => {
                self.state.focus = Focus::Results;
            }
            UserAction::Input(c) => {
                self.state.input.push(c);
            }
            UserAction::Backspace => {
                self.state.input.pop();
            }
            UserAction::ClearInput => {
                self.state.input.clear();
            }
            UserAction::Submit => {
                if !self.state.is_loading {
                    self.state.submit_input();
                }
            }
        }
    }

    fn open_selected(&mut self) {
        let Some(track) = self.state.selected_track() else {
            return;
        };
        let name = track.name.clone();
        let Some(url) = track.embed_url().or_else(|| track.external_url.clone()) else {
            self.state.set_notification(Notification::error("No player link for this track"));
            return;
        };
        match open::that(&url) {
            Ok(()) => self.state.set_notification(Notification::info(format!("Opening: {name}"))),
            Err(e) => {
                warn!("Could not open browser: {e}");
                self.state.set_notification(Notification::error(format!("Could not open {url}")));
            }
        }
    }
}
