use strum::Display;

/// The two searchable collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SearchCategory {
    #[strum(serialize = "image-posts")]
    ImagePosts,
    #[strum(serialize = "comments")]
    Comments,
}
