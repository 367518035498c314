//! Keyboard chords that open the browser's developer tools.

/// The parts of a `keydown` event the lockout looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyChord<'a> {
    /// `KeyboardEvent.code`, e.g. `"KeyI"` or `"F12"`.
    pub code: &'a str,
    pub ctrl: bool,
    pub shift: bool,
}

impl<'a> KeyChord<'a> {
    pub fn new(code: &'a str, ctrl: bool, shift: bool) -> Self {
        Self { code, ctrl, shift }
    }
}

/// F12, Ctrl+Shift+I, Ctrl+Shift+J and Ctrl+U.
///
/// Matches on `KeyboardEvent.code`, which names the physical key position.
/// On layouts such as AZERTY or Dvorak the letter printed on that key may
/// differ, so the chords follow the QWERTY position rather than the letter.
/// The lockout is advisory either way.
pub fn is_devtools_shortcut(chord: KeyChord<'_>) -> bool {
    match chord.code {
        "F12" => true,
        "KeyI" | "KeyJ" => chord.ctrl && chord.shift,
        "KeyU" => chord.ctrl,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devtools_chords_are_suppressed() {
        assert!(is_devtools_shortcut(KeyChord::new("F12", false, false)));
        assert!(is_devtools_shortcut(KeyChord::new("KeyI", true, true)));
        assert!(is_devtools_shortcut(KeyChord::new("KeyJ", true, true)));
        assert!(is_devtools_shortcut(KeyChord::new("KeyU", true, false)));
    }

    #[test]
    fn view_source_ignores_shift() {
        assert!(is_devtools_shortcut(KeyChord::new("KeyU", true, true)));
    }

    #[test]
    fn modifiers_still_pass_f12() {
        assert!(is_devtools_shortcut(KeyChord::new("F12", true, true)));
    }

    #[test]
    fn ordinary_chords_pass_through() {
        assert!(!is_devtools_shortcut(KeyChord::new("KeyS", true, false)));
        assert!(!is_devtools_shortcut(KeyChord::new("KeyI", true, false)));
        assert!(!is_devtools_shortcut(KeyChord::new("KeyJ", false, true)));
        assert!(!is_devtools_shortcut(KeyChord::new("KeyU", false, false)));
        assert!(!is_devtools_shortcut(KeyChord::new("F11", false, false)));
        assert!(!is_devtools_shortcut(KeyChord::default()));
    }
}
