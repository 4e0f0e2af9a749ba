//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go to the landing page
    Landing,
    /// Go to the dashboard
    Dashboard,
}

/// Transaction dialog actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum DialogAction {
    /// Open the dialog on the income tab
    NewIncome,
    /// Open the dialog on the expense tab
    NewExpense,
    /// Close the dialog, discarding the draft
    Close,
}

/// Separator and modifier labels used when displaying shortcuts
struct KeyLabels {
    separator: &'static str,
    secondary: &'static str,
    alt: &'static str,
    shift: &'static str,
}

#[cfg(target_os = "macos")]
const KEY_LABELS: KeyLabels = KeyLabels {
    separator: "",
    secondary: "⌘",
    alt: "⌥",
    shift: "⇧",
};

#[cfg(not(target_os = "macos"))]
const KEY_LABELS: KeyLabels = KeyLabels {
    separator: "+",
    secondary: "Ctrl",
    alt: "Alt",
    shift: "Shift",
};

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" | "ctrl" => KEY_LABELS.secondary.to_string(),
            "alt" => KEY_LABELS.alt.to_string(),
            "shift" => KEY_LABELS.shift.to_string(),
            "escape" => "Esc".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(KEY_LABELS.separator)
}

/// Keystroke for navigating to the landing page
pub const LANDING_KEYSTROKE: &str = "secondary-1";
/// Keystroke for navigating to the dashboard
pub const DASHBOARD_KEYSTROKE: &str = "secondary-2";
/// Keystroke for opening the dialog on the income tab
pub const NEW_INCOME_KEYSTROKE: &str = "secondary-i";
/// Keystroke for opening the dialog on the expense tab
pub const NEW_EXPENSE_KEYSTROKE: &str = "secondary-e";

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new(LANDING_KEYSTROKE, NavAction::Landing, None),
        KeyBinding::new(DASHBOARD_KEYSTROKE, NavAction::Dashboard, None),
        // Transaction dialog
        KeyBinding::new(NEW_INCOME_KEYSTROKE, DialogAction::NewIncome, None),
        KeyBinding::new(NEW_EXPENSE_KEYSTROKE, DialogAction::NewExpense, None),
        KeyBinding::new("escape", DialogAction::Close, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-2"), "Ctrl+2");
        assert_eq!(humanize_keystroke("secondary-shift-e"), "Ctrl+Shift+E");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-2"), "⌘2");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }
}
