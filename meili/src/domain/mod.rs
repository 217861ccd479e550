mod search;
mod settings;
mod stats;

pub use search::*;
pub use settings::*;
pub use stats::*;
