mod event_loop;
mod messages;
mod tasks;

pub use event_loop::run_app;
