use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::dto::{CommentHit, PostHit, SearchPage, Stats};

/// Results coming back from spawned request tasks, applied to App state on
/// the event loop.
#[derive(Debug)]
pub(super) enum Message {
    SearchCompleted {
        posts: SearchPage<PostHit>,
        comments: SearchPage<CommentHit>,
    },
    SearchFailed,
    MorePostsLoaded(SearchPage<PostHit>),
    MorePostsFailed,
    MoreCommentsLoaded(SearchPage<CommentHit>),
    MoreCommentsFailed,
    StatsLoaded(Stats),
}

pub(super) type MessageTx = UnboundedSender<Message>;
pub(super) type MessageRx = UnboundedReceiver<Message>;

pub(super) fn channel() -> (MessageTx, MessageRx) {
    mpsc::unbounded_channel()
}
