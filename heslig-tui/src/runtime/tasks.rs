use crate::api::ApiClient;
use crate::app::App;

use super::messages::{Message, MessageTx};

/// Submit the current input as a combined search. Both category requests
/// run in one task, so aborting the stored handle cancels both.
pub(super) fn spawn_search(app: &mut App, client: &ApiClient, tx: &MessageTx) {
    let Some(term) = app.begin_search() else {
        return;
    };

    let client = client.clone();
    let tx = tx.clone();
    let handle = tokio::spawn(async move {
        let message = match client.search_both(&term).await {
            Ok((posts, comments)) => Message::SearchCompleted { posts, comments },
            Err(_) => Message::SearchFailed,
        };
        let _ = tx.send(message);
    });

    app.search_task = Some(handle);
}

/// Load-more tasks are per category and independent; they are not tracked
/// for cancellation and a new search does not abort them.
pub(super) fn spawn_more_posts(app: &mut App, client: &ApiClient, tx: &MessageTx) {
    let Some((term, offset)) = app.posts.begin_load_more() else {
        return;
    };

    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let message = match client.search_image_posts(&term, offset).await {
            Ok(page) => Message::MorePostsLoaded(page),
            Err(_) => Message::MorePostsFailed,
        };
        let _ = tx.send(message);
    });
}

pub(super) fn spawn_more_comments(app: &mut App, client: &ApiClient, tx: &MessageTx) {
    let Some((term, offset)) = app.comments.begin_load_more() else {
        return;
    };

    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let message = match client.search_comments(&term, offset).await {
            Ok(page) => Message::MoreCommentsLoaded(page),
            Err(_) => Message::MoreCommentsFailed,
        };
        let _ = tx.send(message);
    });
}

/// Fetch the stats footer once at startup. Failures are simply ignored;
/// the footer stays empty.
pub(super) fn spawn_stats_fetch(client: &ApiClient, tx: &MessageTx) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Ok(stats) = client.fetch_stats().await {
            let _ = tx.send(Message::StatsLoaded(stats));
        }
    });
}
