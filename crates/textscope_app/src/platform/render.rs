use textscope_core::MenuView;

pub fn render(view: &MenuView) -> String {
    let mut text = format!("\n===== {} =====\n", view.title);
    for entry in &view.entries {
        text.push_str(&format!("{} - {}\n", entry.key, entry.label));
    }
    text.pop();
    text
}
