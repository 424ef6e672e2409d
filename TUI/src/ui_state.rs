#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Analyze,
}

#[derive(Default)]
pub struct UIState {
    pub screen: Screen,
    pub status_message: Option<String>,

    // Tick at which the status message was set
    pub status_set_at: u64,

    // Results panel scroll (lines from top)
    pub results_scroll: u16,

    // Largest useful results_scroll for the current layout
    pub results_scroll_limit: u16,

    // Debug overlay
    pub debug_mode: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }
}
