mod panel;
mod throttle;

pub use panel::{PanelState, ResultSet};
pub use throttle::Throttle;

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::api::dto::{CommentHit, PostHit, SearchPage, Stats};

/// Window in which repeated submissions are dropped.
pub const SUBMIT_WINDOW: Duration = Duration::from_millis(2000);

/// The one user-facing failure message. No detail, no retry.
pub const FAILURE_BANNER: &str = "IRGENDWAS DOOFES IST PASSIERT :/";

pub const HINTS: &[&str] = &[
    "Tags werden nicht durchsucht - verwende dafür die Suche auf pr0gramm.",
    "Inhalte von Kommentaren werden nicht angezeigt, weil wir hier keine Inhalte hosten (wollen/dürfen).",
    "Das pr0gramm mag dich <3",
    "Pizza mit Ananas ist essbar",
    "Der Suchindex ist nicht vollständig, wird aber laufend aktualisiert.",
];

pub struct App {
    pub running: bool,
    pub query_input: String,
    pub posts: PanelState<PostHit>,
    pub comments: PanelState<CommentHit>,
    pub stats: Option<Stats>,
    /// Set when a combined search (or a load-more) fails; cleared by the
    /// next accepted submission.
    pub failed: bool,
    pub throttle: Throttle,
    /// Handle of the in-flight combined search, if any. Aborting it
    /// cancels both category requests.
    pub search_task: Option<JoinHandle<()>>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
    pub hint_index: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            query_input: String::new(),
            posts: PanelState::Idle,
            comments: PanelState::Idle,
            stats: None,
            failed: false,
            throttle: Throttle::new(SUBMIT_WINDOW),
            search_task: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            hint_index: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.posts.is_loading() || self.comments.is_loading()
    }

    /// Handle a submission. Any in-flight combined search is aborted first
    /// (back to Idle), then the throttle decides whether this submission is
    /// admitted at all. Returns the term to search when it is.
    pub fn begin_search(&mut self) -> Option<String> {
        let term = self.query_input.trim().to_string();
        if term.is_empty() {
            return None;
        }

        if let Some(task) = self.search_task.take() {
            task.abort();
            self.posts = PanelState::Idle;
            self.comments = PanelState::Idle;
        }

        if !self.throttle.try_accept() {
            return None;
        }

        self.failed = false;
        self.posts = PanelState::Loading;
        self.comments = PanelState::Loading;
        Some(term)
    }

    pub fn search_completed(
        &mut self,
        posts: SearchPage<PostHit>,
        comments: SearchPage<CommentHit>,
    ) {
        self.posts = PanelState::Loaded {
            results: ResultSet::from_first_page(posts),
            loading_more: false,
        };
        self.comments = PanelState::Loaded {
            results: ResultSet::from_first_page(comments),
            loading_more: false,
        };
        self.search_task = None;
    }

    pub fn search_failed(&mut self) {
        self.posts = PanelState::Failed;
        self.comments = PanelState::Failed;
        self.failed = true;
        self.search_task = None;
    }

    pub fn current_hint(&self) -> &'static str {
        HINTS[self.hint_index % HINTS.len()]
    }

    pub fn advance_hint(&mut self) {
        self.hint_index = (self.hint_index + 1) % HINTS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_page(hits: u32, total: u64, offset: i64) -> SearchPage<PostHit> {
        SearchPage {
            success: true,
            term: "katze".to_string(),
            hits: (0..hits)
                .map(|n| PostHit {
                    id: n as i64,
                    author: "gamb".to_string(),
                    thumb_url: String::new(),
                    sfw_flag: "1".to_string(),
                    promoted: 0,
                    created_at: 0,
                    up: 1,
                    down: 0,
                })
                .collect(),
            limit: 40,
            total,
            offset,
            query_time_ms: 2,
        }
    }

    fn comment_page() -> SearchPage<CommentHit> {
        SearchPage {
            success: true,
            term: "katze".to_string(),
            hits: vec![],
            limit: 20,
            total: 0,
            offset: 0,
            query_time_ms: 1,
        }
    }

    #[test]
    fn empty_input_is_never_submitted() {
        let mut app = App::new();
        app.query_input = "   ".to_string();
        assert_eq!(app.begin_search(), None);
        assert!(matches!(app.posts, PanelState::Idle));
    }

    #[test]
    fn rapid_resubmission_is_dropped_by_the_throttle() {
        let mut app = App::new();
        app.query_input = "katze".to_string();

        assert_eq!(app.begin_search(), Some("katze".to_string()));
        // Immediately again: inside the 2 s window, dropped.
        assert_eq!(app.begin_search(), None);
    }

    #[test]
    fn submission_trims_the_input() {
        let mut app = App::new();
        app.query_input = "  Katze  ".to_string();
        assert_eq!(app.begin_search(), Some("Katze".to_string()));
        assert!(matches!(app.posts, PanelState::Loading));
        assert!(matches!(app.comments, PanelState::Loading));
    }

    #[test]
    fn completed_search_loads_both_panels() {
        let mut app = App::new();
        app.query_input = "katze".to_string();
        app.begin_search().unwrap();

        app.search_completed(post_page(15, 47, 0), comment_page());

        let posts = app.posts.results().unwrap();
        assert_eq!(posts.hits.len(), 15);
        assert_eq!(posts.total, 47);
        assert!(!app.failed);
        assert!(!app.is_loading());
    }

    #[test]
    fn failed_search_marks_both_panels_and_raises_the_banner() {
        let mut app = App::new();
        app.query_input = "katze".to_string();
        app.begin_search().unwrap();

        app.search_failed();

        assert!(matches!(app.posts, PanelState::Failed));
        assert!(matches!(app.comments, PanelState::Failed));
        assert!(app.failed);
    }

    #[test]
    fn hints_rotate_and_wrap() {
        let mut app = App::new();
        let first = app.current_hint();
        for _ in 0..HINTS.len() {
            app.advance_hint();
        }
        assert_eq!(app.current_hint(), first);
    }
}
