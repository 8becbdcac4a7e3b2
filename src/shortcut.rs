//! Global shortcut registration for the URL bar toggle.

use tauri::{AppHandle, Manager, Runtime};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::error::ShellError;
use crate::AppState;

/// Parses a "ctrl+shift+l"-style string into a shortcut.
pub fn parse_shortcut(spec: &str) -> Result<Shortcut, ShellError> {
    let mut modifiers = Modifiers::empty();
    let mut code = None;

    for part in spec.split('+').map(str::trim) {
        match part.to_lowercase().as_str() {
            "cmd" | "command" | "super" | "meta" => modifiers |= Modifiers::SUPER,
            "ctrl" | "control" => modifiers |= Modifiers::CONTROL,
            "alt" | "option" => modifiers |= Modifiers::ALT,
            "shift" => modifiers |= Modifiers::SHIFT,
            other => {
                code = Some(key_code(other).ok_or_else(|| {
                    ShellError::InvalidShortcut(spec.to_string())
                })?);
            }
        }
    }

    let code = code.ok_or_else(|| ShellError::InvalidShortcut(spec.to_string()))?;
    let modifiers = (!modifiers.is_empty()).then_some(modifiers);
    Ok(Shortcut::new(modifiers, code))
}

fn key_code(key: &str) -> Option<Code> {
    if key.len() == 1 {
        return match key.chars().next()? {
            'a' => Some(Code::KeyA),
            'b' => Some(Code::KeyB),
            'c' => Some(Code::KeyC),
            'd' => Some(Code::KeyD),
            'e' => Some(Code::KeyE),
            'f' => Some(Code::KeyF),
            'g' => Some(Code::KeyG),
            'h' => Some(Code::KeyH),
            'i' => Some(Code::KeyI),
            'j' => Some(Code::KeyJ),
            'k' => Some(Code::KeyK),
            'l' => Some(Code::KeyL),
            'm' => Some(Code::KeyM),
            'n' => Some(Code::KeyN),
            'o' => Some(Code::KeyO),
            'p' => Some(Code::KeyP),
            'q' => Some(Code::KeyQ),
            'r' => Some(Code::KeyR),
            's' => Some(Code::KeyS),
            't' => Some(Code::KeyT),
            'u' => Some(Code::KeyU),
            'v' => Some(Code::KeyV),
            'w' => Some(Code::KeyW),
            'x' => Some(Code::KeyX),
            'y' => Some(Code::KeyY),
            'z' => Some(Code::KeyZ),
            '0' => Some(Code::Digit0),
            '1' => Some(Code::Digit1),
            '2' => Some(Code::Digit2),
            '3' => Some(Code::Digit3),
            '4' => Some(Code::Digit4),
            '5' => Some(Code::Digit5),
            '6' => Some(Code::Digit6),
            '7' => Some(Code::Digit7),
            '8' => Some(Code::Digit8),
            '9' => Some(Code::Digit9),
            _ => None,
        };
    }
    match key {
        "space" => Some(Code::Space),
        "escape" | "esc" => Some(Code::Escape),
        "enter" | "return" => Some(Code::Enter),
        "tab" => Some(Code::Tab),
        _ => None,
    }
}

/// Registers the toggle shortcut. Pressing it toggles the URL bar; requests
/// arriving while a transition is in flight are dropped by the controller.
pub fn register_toggle<R: Runtime>(app: &AppHandle<R>, spec: &str) -> Result<(), ShellError> {
    let shortcut = parse_shortcut(spec)?;
    log::info!("registering toggle shortcut {spec:?}");

    app.global_shortcut()
        .on_shortcut(shortcut, move |app, _shortcut, event| {
            if event.state != ShortcutState::Pressed {
                return;
            }
            let Some(state) = app.try_state::<AppState>() else {
                return;
            };
            let Ok(mut controller) = state.controller.lock() else {
                return;
            };
            controller.toggle();
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_and_key() {
        let shortcut = parse_shortcut("ctrl+l").unwrap();
        assert_eq!(shortcut, Shortcut::new(Some(Modifiers::CONTROL), Code::KeyL));

        let shortcut = parse_shortcut("Cmd+Shift+P").unwrap();
        assert_eq!(
            shortcut,
            Shortcut::new(Some(Modifiers::SUPER | Modifiers::SHIFT), Code::KeyP)
        );
    }

    #[test]
    fn parses_bare_key() {
        let shortcut = parse_shortcut("escape").unwrap();
        assert_eq!(shortcut, Shortcut::new(None, Code::Escape));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_shortcut("ctrl+definitely-not-a-key").is_err());
        assert!(parse_shortcut("ctrl+shift").is_err());
        assert!(parse_shortcut("").is_err());
    }
}
