use crate::{AppState, Effect, Msg, Screen};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.screen() == Screen::Exit {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Input(raw) => {
            let choice = normalize_choice(&raw);
            let (next, effects) = transition(state.screen(), &choice);
            if next != state.screen() {
                state.go_to(next);
            } else {
                state.mark_dirty();
            }
            effects
        }
        Msg::EndOfInput => {
            state.go_to(Screen::Exit);
            vec![Effect::Quit]
        }
    };

    (state, effects)
}

/// Trimmed, upper-cased menu choice.
pub fn normalize_choice(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn transition(screen: Screen, choice: &str) -> (Screen, Vec<Effect>) {
    use Screen::*;
    let stay = |effect| (screen, vec![effect]);
    match (screen, choice) {
        (MainMenu, "A") => stay(Effect::AnalyseFile),
        (MainMenu, "B") => stay(Effect::AnalyseDirectory),
        (MainMenu, "C") => stay(Effect::AnalyseWikipedia),
        (MainMenu, "D") => (ProcessMenu, Vec::new()),
        (MainMenu, "E") => (SecurityMenu, Vec::new()),
        (MainMenu, "Q") => (Exit, vec![Effect::Quit]),
        (ProcessMenu, "1") => stay(Effect::ListProcesses),
        (ProcessMenu, "2") => stay(Effect::SearchProcesses),
        (ProcessMenu, "3") => stay(Effect::KillProcess),
        (SecurityMenu, "1") => stay(Effect::LockFile),
        (SecurityMenu, "2") => stay(Effect::UnlockFile),
        (ProcessMenu | SecurityMenu, "Q") => (MainMenu, Vec::new()),
        _ => stay(Effect::ReportInvalidChoice),
    }
}
