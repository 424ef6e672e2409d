use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::backend::InputMode;
use crate::controller::Phase;
use crate::ui_state::Screen;

/// The parts of application state that decide what a key means.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    pub screen: Screen,
    pub phase: Phase,
    pub mode: InputMode,
    pub field_empty: bool,
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse_key(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if ctx.screen == Screen::Home {
            return match key.code {
                KeyCode::Esc => Some(Action::Quit),
                _ => Some(Action::Start),
            };
        }

        match key.code {
            KeyCode::Esc if ctx.field_empty => Some(Action::Quit),
            KeyCode::Esc => Some(Action::ClearField),
            KeyCode::Enter if ctx.phase == Phase::Succeeded => Some(Action::Next),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleMode),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::F(12) => Some(Action::ToggleDebug),
            KeyCode::Char('n') if ctrl => Some(Action::Next),
            KeyCode::Char('v') if ctrl => Some(Action::PasteClipboard),
            KeyCode::Char('j') if ctrl && ctx.mode == InputMode::Text => Some(Action::Newline),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        }
    }
}

/// Normalize pasted text for the given field. URLs are single-line.
pub fn sanitize_paste(text: &str, mode: InputMode) -> String {
    let without_cr = text.chars().filter(|c| *c != '\r');
    match mode {
        InputMode::Url => without_cr
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect::<String>()
            .trim()
            .to_string(),
        InputMode::Text => without_cr.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(phase: Phase, mode: InputMode, field_empty: bool) -> KeyContext {
        KeyContext {
            screen: Screen::Analyze,
            phase,
            mode,
            field_empty,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_home_any_key_starts() {
        let home = KeyContext {
            screen: Screen::Home,
            ..ctx(Phase::Idle, InputMode::Url, true)
        };
        assert_eq!(CommandParser::parse_key(key(KeyCode::Char('x')), home), Some(Action::Start));
        assert_eq!(CommandParser::parse_key(key(KeyCode::Esc), home), Some(Action::Quit));
    }

    #[test]
    fn test_enter_submits_or_advances() {
        let idle = ctx(Phase::Idle, InputMode::Url, false);
        let done = ctx(Phase::Succeeded, InputMode::Url, false);
        let failed = ctx(Phase::Failed, InputMode::Text, false);

        assert_eq!(CommandParser::parse_key(key(KeyCode::Enter), idle), Some(Action::Submit));
        assert_eq!(CommandParser::parse_key(key(KeyCode::Enter), done), Some(Action::Next));
        assert_eq!(CommandParser::parse_key(key(KeyCode::Enter), failed), Some(Action::Submit));
    }

    #[test]
    fn test_esc_clears_then_quits() {
        assert_eq!(
            CommandParser::parse_key(key(KeyCode::Esc), ctx(Phase::Idle, InputMode::Url, false)),
            Some(Action::ClearField)
        );
        assert_eq!(
            CommandParser::parse_key(key(KeyCode::Esc), ctx(Phase::Idle, InputMode::Url, true)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_ctrl_bindings() {
        let text = ctx(Phase::Idle, InputMode::Text, false);
        let url = ctx(Phase::Idle, InputMode::Url, false);

        assert_eq!(CommandParser::parse_key(ctrl('c'), text), Some(Action::Quit));
        assert_eq!(CommandParser::parse_key(ctrl('n'), text), Some(Action::Next));
        assert_eq!(CommandParser::parse_key(ctrl('v'), url), Some(Action::PasteClipboard));
        assert_eq!(CommandParser::parse_key(ctrl('j'), text), Some(Action::Newline));
        assert_eq!(CommandParser::parse_key(ctrl('j'), url), None);
        assert_eq!(CommandParser::parse_key(ctrl('q'), url), None);
    }

    #[test]
    fn test_chars_are_input() {
        assert_eq!(
            CommandParser::parse_key(key(KeyCode::Char('h')), ctx(Phase::Loading, InputMode::Text, true)),
            Some(Action::Input('h'))
        );
    }

    #[test]
    fn test_sanitize_paste() {
        assert_eq!(
            sanitize_paste(" https://x.com/a/status/1\r\n", InputMode::Url),
            "https://x.com/a/status/1"
        );
        assert_eq!(sanitize_paste("line one\r\nline two", InputMode::Text), "line one\nline two");
    }
}
