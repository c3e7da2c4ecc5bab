//! Platform-specific configuration

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Platform-appropriate secondary modifier for form shortcuts
/// - macOS: SUPER (Cmd key), for terminals that forward it
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const FORM_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Password reveal shortcut display
/// - macOS: "Cmd+T" (Ctrl+T also works)
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+T";

/// Match `Ctrl+<c>` or the platform modifier with `<c>`
pub fn is_form_shortcut(key: &KeyEvent, c: char) -> bool {
    let has_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
        || key.modifiers.contains(FORM_MODIFIER);
    has_modifier && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_shortcut_matches() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(is_form_shortcut(&key, 's'));
        assert!(!is_form_shortcut(&key, 't'));
    }

    #[test]
    fn test_platform_modifier_matches() {
        let key = KeyEvent::new(KeyCode::Char('t'), FORM_MODIFIER);
        assert!(is_form_shortcut(&key, 't'));
    }

    #[test]
    fn test_plain_char_is_not_shortcut() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(!is_form_shortcut(&key, 's'));
    }
}
