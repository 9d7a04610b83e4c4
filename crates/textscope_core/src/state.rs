use crate::view_model::{menu_entries, MenuView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    ProcessMenu,
    SecurityMenu,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        // Starts dirty so the first menu gets drawn.
        Self {
            screen: Screen::MainMenu,
            dirty: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_finished(&self) -> bool {
        self.screen == Screen::Exit
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            screen: self.screen,
            title: title(self.screen),
            entries: menu_entries(self.screen),
        }
    }

    /// Returns whether the menu must be redrawn, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

fn title(screen: Screen) -> &'static str {
    match screen {
        Screen::MainMenu => "MENU",
        Screen::ProcessMenu => "ProcessOps",
        Screen::SecurityMenu => "SecureOps",
        Screen::Exit => "",
    }
}
