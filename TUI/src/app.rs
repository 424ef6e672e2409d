use arboard::Clipboard;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::action::Action;
use crate::backend::{AnalysisResult, SentimentApi};
use crate::command::{sanitize_paste, KeyContext};
use crate::config::Config;
use crate::controller::{Phase, SubmissionController};
use crate::error::{ApiError, SubmitError};
use crate::ui_state::{Screen, UIState};

/// A finished request, tagged with the id it was issued under.
#[derive(Debug)]
pub struct Completion {
    pub id: u64,
    pub outcome: Result<AnalysisResult, ApiError>,
}

pub struct App {
    pub ui: UIState,
    pub controller: SubmissionController,
    pub animation_frame: usize,
    pub animation_tick: u64,
    pub api_base_url: String,
    pub request_started: Option<Instant>,
    pub last_completed: Option<DateTime<Local>>,
    api: Arc<dyn SentimentApi>,
    runtime: Handle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    status_timeout_ticks: u64,
    animation_frame_mod: usize,
    scroll_step: u16,
}

impl App {
    pub fn new(api: Arc<dyn SentimentApi>, runtime: Handle, config: &Config) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            ui: UIState::new(),
            controller: SubmissionController::new(),
            animation_frame: 0,
            animation_tick: 0,
            api_base_url: config.api_base_url.clone(),
            request_started: None,
            last_completed: None,
            api,
            runtime,
            completions_tx,
            completions_rx,
            status_timeout_ticks: config.status_timeout_ticks,
            animation_frame_mod: config.animation_frame_mod.max(1),
            scroll_step: config.scroll_step.max(1),
        }
    }

    pub fn key_context(&self) -> KeyContext {
        let state = self.controller.state();
        KeyContext {
            screen: self.ui.screen,
            phase: self.controller.phase(),
            mode: state.mode,
            field_empty: state.active_value().is_empty(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some(message.into());
        self.ui.status_set_at = self.animation_tick;
    }

    pub fn tick(&mut self) {
        self.animation_tick += 1;
        self.animation_frame = (self.animation_frame + 1) % self.animation_frame_mod;

        if self.ui.status_message.is_some()
            && self.animation_tick.saturating_sub(self.ui.status_set_at) >= self.status_timeout_ticks
        {
            self.ui.status_message = None;
        }
    }

    /// Apply an action. Returns false when the app should exit.
    pub fn apply(&mut self, action: Action) -> bool {
        let loading = self.controller.state().is_loading;

        match action {
            Action::Quit => return false,
            Action::Start => self.ui.screen = Screen::Analyze,
            Action::Submit => self.submit(),
            Action::Next => {
                self.controller.clear();
                self.request_started = None;
                self.ui.results_scroll = 0;
            }
            Action::ToggleMode => self.controller.toggle_mode(),
            Action::ToggleDebug => self.ui.debug_mode = !self.ui.debug_mode,
            Action::ScrollUp => {
                self.ui.results_scroll = self.ui.results_scroll.saturating_sub(self.scroll_step);
            }
            Action::ScrollDown => {
                self.ui.results_scroll = self
                    .ui
                    .results_scroll
                    .saturating_add(self.scroll_step)
                    .min(self.ui.results_scroll_limit);
            }
            // Inputs are disabled while a request is in flight
            _ if loading => {}
            Action::Input(c) => self.controller.push_char(c),
            Action::Newline => self.controller.push_char('\n'),
            Action::Backspace => self.controller.pop_char(),
            Action::ClearField => self.controller.clear_active(),
            Action::Paste(text) => self.paste(&text),
            Action::PasteClipboard => match Clipboard::new().and_then(|mut c| c.get_text()) {
                Ok(text) => self.paste(&text),
                Err(e) => {
                    tracing::debug!(error = %e, "clipboard unavailable");
                    self.set_status("Clipboard unavailable");
                }
            },
        }
        true
    }

    fn paste(&mut self, text: &str) {
        let cleaned = sanitize_paste(text, self.controller.state().mode);
        self.controller.push_str(&cleaned);
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            Ok(pending) => {
                self.request_started = Some(Instant::now());
                self.ui.results_scroll = 0;

                let api = Arc::clone(&self.api);
                let tx = self.completions_tx.clone();
                self.runtime.spawn(async move {
                    let outcome = api.analyze(&pending.request).await;
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(Completion { id: pending.id, outcome });
                });
            }
            Err(SubmitError::Busy) => self.set_status("Analysis already in progress"),
            Err(SubmitError::Validation(_)) => {}
        }
    }

    /// Apply a completion. Stale ones are dropped by the controller.
    pub fn handle_completion(&mut self, completion: Completion) {
        let elapsed = self.request_started.map(|s| s.elapsed());
        if !self.controller.resolve(completion.id, completion.outcome) {
            return;
        }
        self.request_started = None;

        if self.controller.phase() == Phase::Succeeded {
            let now = Local::now();
            self.last_completed = Some(now);
            match elapsed {
                Some(d) => self.set_status(format!(
                    "Analyzed at {} in {:.1}s",
                    now.format("%H:%M:%S"),
                    d.as_secs_f64()
                )),
                None => self.set_status(format!("Analyzed at {}", now.format("%H:%M:%S"))),
            }
        }
    }

    /// Drain completions without blocking.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.handle_completion(completion);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AnalyzeRequest, InputMode, SentimentTriple};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeApi {
        seen: Mutex<Vec<AnalyzeRequest>>,
        fail_with_timeout: bool,
    }

    impl FakeApi {
        fn new(fail_with_timeout: bool) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                fail_with_timeout,
            })
        }
    }

    #[async_trait]
    impl SentimentApi for FakeApi {
        async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError> {
            self.seen.lock().unwrap().push(request.clone());
            if self.fail_with_timeout {
                return Err(ApiError::Timeout);
            }
            Ok(AnalysisResult {
                text: "great product!".to_string(),
                local_sentiment: Some(SentimentTriple::new(0.8, 0.15, 0.05)),
                local_overall_sentiment: Some("Positive".to_string()),
                ..Default::default()
            })
        }
    }

    fn app_with(api: Arc<FakeApi>) -> App {
        let mut app = App::new(api, Handle::current(), &Config::default());
        app.apply(Action::Start);
        app
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let api = FakeApi::new(false);
        let mut app = app_with(api.clone());
        app.apply(Action::ToggleMode);
        for c in "great product!".chars() {
            app.apply(Action::Input(c));
        }

        app.apply(Action::Submit);
        assert_eq!(app.controller.phase(), Phase::Loading);

        let completion = app.completions_rx.recv().await.unwrap();
        app.handle_completion(completion);

        assert_eq!(app.controller.phase(), Phase::Succeeded);
        assert!(app.last_completed.is_some());
        assert_eq!(
            api.seen.lock().unwrap().as_slice(),
            &[AnalyzeRequest::Text { tweet_text: "great product!".to_string() }]
        );
    }

    #[tokio::test]
    async fn test_empty_submit_never_calls_api() {
        let api = FakeApi::new(false);
        let mut app = app_with(api.clone());

        app.apply(Action::Submit);
        tokio::task::yield_now().await;
        app.poll_completions();

        assert!(api.seen.lock().unwrap().is_empty());
        assert_eq!(app.controller.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_timeout_recovers_to_text_mode() {
        let mut app = app_with(FakeApi::new(true));
        app.apply(Action::Paste("https://x.com/a/status/1\n".to_string()));

        app.apply(Action::Submit);
        let completion = app.completions_rx.recv().await.unwrap();
        app.handle_completion(completion);

        let state = app.controller.state();
        assert_eq!(state.mode, InputMode::Text);
        assert!(state.url_value.is_empty());
        assert!(state.error_message.as_deref().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn test_next_discards_in_flight_result() {
        let mut app = app_with(FakeApi::new(false));
        app.apply(Action::Input('x'));
        app.apply(Action::Submit);

        app.apply(Action::Next);
        let completion = app.completions_rx.recv().await.unwrap();
        app.handle_completion(completion);

        assert_eq!(app.controller.phase(), Phase::Idle);
        assert!(app.controller.state().result.is_none());
    }

    #[tokio::test]
    async fn test_typing_ignored_while_loading() {
        let mut app = app_with(FakeApi::new(false));
        app.apply(Action::Input('a'));
        app.apply(Action::Submit);

        app.apply(Action::Input('b'));
        app.apply(Action::Submit);

        assert_eq!(app.controller.state().url_value, "a");
        assert_eq!(app.ui.status_message.as_deref(), Some("Analysis already in progress"));
    }

    #[tokio::test]
    async fn test_scroll_stops_at_limit() {
        let mut app = app_with(FakeApi::new(false));
        app.ui.results_scroll_limit = 4;

        for _ in 0..10 {
            app.apply(Action::ScrollDown);
        }
        assert_eq!(app.ui.results_scroll, 4);

        app.apply(Action::ScrollUp);
        assert_eq!(app.ui.results_scroll, 1);
    }

    #[tokio::test]
    async fn test_status_message_expires() {
        let mut app = app_with(FakeApi::new(false));
        app.set_status("hello");
        for _ in 0..Config::default().status_timeout_ticks {
            app.tick();
        }
        assert!(app.ui.status_message.is_none());
    }
}
