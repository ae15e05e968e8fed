use crate::model::panel::Panel;

/// Title line used in exported scripts.
pub const SCRIPT_TITLE: &str = "My Comic Story";

/// Plain-text script: title, the story, then one block per panel with its visual description.
pub fn script_text(story: &str, panels: &[Panel]) -> String {
    let mut out = format!("TITLE: {SCRIPT_TITLE}\n\nSTORY:\n{story}\n\n");
    for (i, p) in panels.iter().enumerate() {
        out.push_str(&format!("--- PANEL {} ---\n", i + 1));
        out.push_str(&format!("Visual: {}\n\n", p.description));
    }
    out
}
