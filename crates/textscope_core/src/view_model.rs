use crate::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub screen: Screen,
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

pub(crate) fn menu_entries(screen: Screen) -> Vec<MenuEntry> {
    let table: &[(&'static str, &'static str)] = match screen {
        Screen::MainMenu => &[
            ("A", "Analyse a file"),
            ("B", "Analyse a directory"),
            ("C", "Analyse a Wikipedia page"),
            ("D", "ProcessOps"),
            ("E", "SecureOps"),
            ("Q", "Quit"),
        ],
        Screen::ProcessMenu => &[
            ("1", "List processes"),
            ("2", "Search processes"),
            ("3", "Kill a process"),
            ("Q", "Back"),
        ],
        Screen::SecurityMenu => &[
            ("1", "Lock a file"),
            ("2", "Unlock a file"),
            ("Q", "Back"),
        ],
        Screen::Exit => &[],
    };
    table
        .iter()
        .map(|&(key, label)| MenuEntry { key, label })
        .collect()
}
