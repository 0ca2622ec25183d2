#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use std::time::Duration;

    use crate::app::state::{AppState, Focus, Notification, Speaker, NO_RESULTS, RESULTS_INTRO};
    use crate::app::App;
    use crate::error::{RecommendError, SearchError};
    use crate::events::{map_key_to_action, UserAction};
    use crate::intent::Interpreter;
    use crate::recommend::Recommender;
    use crate::spotify::search::{CatalogSearch, TrackRecord};

    struct StubCatalog {
        tracks: Vec<TrackRecord>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogSearch for StubCatalog {
        async fn search_tracks(&self, _query: &str, _limit: u32) -> Result<Vec<TrackRecord>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tracks.clone())
        }
    }

    fn track(name: &str) -> TrackRecord {
        TrackRecord {
            id: Some(format!("{name}-id")),
            name: name.to_string(),
            artists: vec!["Artist".to_string()],
            external_url: Some(format!("https://open.spotify.com/track/{name}-id")),
        }
    }

    fn app_with(tracks: Vec<TrackRecord>) -> (App, Arc<StubCatalog>) {
        let catalog = Arc::new(StubCatalog { tracks, calls: AtomicUsize::new(0) });
        let recommender = Recommender::new(Interpreter::default(), catalog.clone(), Duration::from_secs(5), 10);
        (App::new(recommender), catalog)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // ── Key mapping ──────────────────────────────────────────────────────────

    #[test]
    fn test_typing_q_in_input_is_text() {
        assert_eq!(map_key_to_action(key(KeyCode::Char('q')), true), Some(UserAction::Input('q')));
        assert_eq!(map_key_to_action(key(KeyCode::Char('q')), false), Some(UserAction::Quit));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_to_action(ctrl_c, true), Some(UserAction::Quit));
        assert_eq!(map_key_to_action(ctrl_c, false), Some(UserAction::Quit));
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(map_key_to_action(key(KeyCode::Enter), true), Some(UserAction::Submit));
        assert_eq!(map_key_to_action(key(KeyCode::Enter), false), Some(UserAction::OpenTrack));
    }

    // ── Input + submit ───────────────────────────────────────────────────────

    #[test]
    fn test_submit_moves_input_to_transcript() {
        let mut state = AppState::default();
        state.input = "chill study beats".to_string();
        state.submit_input();
        assert!(state.input.is_empty());
        assert!(state.is_loading);
        assert_eq!(state.pending_query.as_deref(), Some("chill study beats"));
        let last = state.transcript.last().unwrap();
        assert_eq!(last.speaker, Speaker::User);
        assert_eq!(last.text, "chill study beats");
    }

    #[test]
    fn test_blank_submit_is_not_echoed() {
        let mut state = AppState::default();
        let before = state.transcript.len();
        state.input = "   ".to_string();
        state.submit_input();
        assert_eq!(state.transcript.len(), before);
        assert_eq!(state.pending_query.as_deref(), Some("   "));
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let (mut app, _) = app_with(vec![]);
        app.state.is_loading = true;
        app.state.input = "party".to_string();
        app.handle_action(UserAction::Submit);
        assert!(app.state.pending_query.is_none());
        assert_eq!(app.state.input, "party");
    }

    // ── Outcomes ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_results_are_shown_in_order() {
        let (mut app, catalog) = app_with(vec![track("one"), track("two")]);
        app.state.input = "happy workout songs in Spanish".to_string();
        app.handle_action(UserAction::Submit);
        let query = app.state.pending_query.take().unwrap();
        app.recommend(&query).await;

        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
        assert!(!app.state.is_loading);
        assert_eq!(app.state.focus, Focus::Results);
        let names: Vec<&str> = app.state.results.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(app.state.transcript.last().unwrap().text, RESULTS_INTRO);
        let (intent, searched) = app.state.last_dispatch.clone().unwrap();
        assert!(intent.contains("situation: workout"));
        assert_eq!(searched, "workout happy workout songs in Spanish language:es");
    }

    #[tokio::test]
    async fn test_empty_results_message() {
        let (mut app, _) = app_with(vec![]);
        app.recommend("asdfgh").await;
        assert!(app.state.results.is_empty());
        assert_eq!(app.state.transcript.last().unwrap().text, NO_RESULTS);
    }

    #[tokio::test]
    async fn test_blank_query_prompts_without_search() {
        let (mut app, catalog) = app_with(vec![track("x")]);
        app.recommend("").await;
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
        let last = app.state.transcript.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "Please enter a query.");
    }

    #[test]
    fn test_timeout_outcome_keeps_previous_results() {
        let mut state = AppState::default();
        state.results = vec![track("kept")];
        state.last_dispatch = Some(("mood: sad".to_string(), "sad sad songs".to_string()));
        state.apply_outcome(Err(RecommendError::Timeout(Duration::from_secs(20))));
        assert_eq!(state.results.len(), 1);
        assert!(state.last_dispatch.is_none());
        assert_eq!(state.transcript.last().unwrap().text, "The request timed out. Please try again.");
        assert!(state.notification.as_ref().unwrap().is_error);
    }

    // ── Selection ────────────────────────────────────────────────────────────

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = AppState::default();
        state.select_next();
        assert_eq!(state.selected, 0);
        state.results = vec![track("a"), track("b")];
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_track().unwrap().name, "a");
    }

    #[test]
    fn test_escape_closes_help_before_focusing_input() {
        let (mut app, _) = app_with(vec![]);
        app.state.focus = Focus::Results;
        app.state.show_help = true;
        app.handle_action(UserAction::FocusInput);
        assert!(!app.state.show_help);
        assert_eq!(app.state.focus, Focus::Results);
        app.handle_action(UserAction::FocusInput);
        assert_eq!(app.state.focus, Focus::Input);
    }

    // ── Notification ──────────────────────────────────────────────────────────

    #[test]
    fn test_notification_tick_decrements() {
        let mut state = AppState::default();
        state.set_notification(Notification::info("hello"));
        assert!(state.notification.is_some());
        // remaining_ticks=30: takes 30 ticks to reach 0, then 1 more tick to clear
        for _ in 0..31 {
            state.tick_notification();
        }
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_notification_error_flag() {
        let n = Notification::error("oops");
        assert!(n.is_error);
        assert_eq!(n.message, "oops");
    }

    #[test]
    fn test_starts_with_greeting() {
        let state = AppState::default();
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].speaker, Speaker::Bot);
        assert_eq!(state.focus, Focus::Input);
    }
}
