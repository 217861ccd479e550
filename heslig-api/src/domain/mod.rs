mod category;
mod counters;
mod page;
mod query;

pub use category::*;
pub use counters::*;
pub use page::*;
pub use query::*;
