mod client;
mod meili_url;
pub mod domain;

pub(crate) use meili_url::*;

pub use client::*;
pub use domain::*;
