pub(crate) mod error;
pub(crate) mod monitor;
pub(crate) mod search;
pub(crate) mod stats;

pub(crate) use error::ApiError;
