mod app;
mod effects;
mod locks;
mod process;
mod prompt;
mod render;

pub use app::{run_app, run_session};
