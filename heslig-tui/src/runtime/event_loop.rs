use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::messages::{channel, Message, MessageTx};
use super::tasks;

const HINT_INTERVAL: Duration = Duration::from_secs(10);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let (tx, mut rx) = channel();

    tasks::spawn_stats_fetch(client, &tx);
    let mut last_hint_rotation = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading() {
            app.throbber_state.calc_next();
        }

        if last_hint_rotation.elapsed() >= HINT_INTERVAL {
            app.advance_hint();
            last_hint_rotation = Instant::now();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, app, client, &tx);
            }
        }

        while let Ok(message) = rx.try_recv() {
            apply_message(message, app);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App, client: &ApiClient, tx: &MessageTx) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            app.running = false;
        }
        (KeyCode::Enter, _) => tasks::spawn_search(app, client, tx),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => tasks::spawn_more_posts(app, client, tx),
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => tasks::spawn_more_comments(app, client, tx),
        (KeyCode::Backspace, _) => {
            app.query_input.pop();
        }
        (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            app.query_input.push(c);
        }
        _ => {}
    }
}

fn apply_message(message: Message, app: &mut App) {
    match message {
        Message::SearchCompleted { posts, comments } => app.search_completed(posts, comments),
        Message::SearchFailed => app.search_failed(),
        Message::MorePostsLoaded(page) => app.posts.finish_load_more(page),
        Message::MorePostsFailed => {
            app.posts.fail_load_more();
            app.failed = true;
        }
        Message::MoreCommentsLoaded(page) => app.comments.finish_load_more(page),
        Message::MoreCommentsFailed => {
            app.comments.fail_load_more();
            app.failed = true;
        }
        Message::StatsLoaded(stats) => app.stats = Some(stats),
    }
}
