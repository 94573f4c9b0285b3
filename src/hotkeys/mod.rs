//! Hotkey system
//!
//! Centralized hotkey management for the editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in `Editor::apply_hotkey()`

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Step back in the edit history
    Undo,
    /// Step forward in the edit history
    Redo,
    /// Toggle playback.
    PlayPause,
    /// Drop a marker at the playhead.
    AddMarker,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (should suppress all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// `key` is the character produced by the key press. Ctrl and Meta are
/// interchangeable so the same chords work on every platform.
pub fn handle_hotkey(
    key: &str,
    shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let command = ctrl || meta;
    match key {
        "z" | "Z" if command && shift => HotkeyResult::Action(HotkeyAction::Redo),
        "z" | "Z" if command => HotkeyResult::Action(HotkeyAction::Undo),
        " " if !command => HotkeyResult::Action(HotkeyAction::PlayPause),
        "m" | "M" if !command => HotkeyResult::Action(HotkeyAction::AddMarker),
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_z_undoes() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey("z", false, true, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::Undo));
    }

    #[test]
    fn test_meta_z_undoes() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey("z", false, false, false, true, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::Undo));
    }

    #[test]
    fn test_ctrl_shift_z_redoes() {
        let ctx = HotkeyContext::default();
        // Shift usually reports the uppercase character.
        let result = handle_hotkey("Z", true, true, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::Redo));
    }

    #[test]
    fn test_plain_z_does_nothing() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey("z", false, false, false, false, &ctx);
        assert_eq!(result, HotkeyResult::NoMatch);
    }

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(" ", false, false, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::PlayPause));
    }

    #[test]
    fn test_m_adds_marker() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey("m", false, false, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Action(HotkeyAction::AddMarker));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
        };
        let result = handle_hotkey("z", false, true, false, false, &ctx);
        assert_eq!(result, HotkeyResult::Suppressed);
    }
}
