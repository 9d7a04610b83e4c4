//! Textscope core: pure menu state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Screen};
pub use update::{normalize_choice, update};
pub use view_model::{MenuEntry, MenuView};
