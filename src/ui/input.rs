// src/ui/input.rs
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// What a terminal event asks the chat screen to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Paste(String),
    Backspace,
    Submit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
}

/// Translate a raw terminal event. `send_button` is the button area from the last draw.
pub fn map_event(event: &Event, send_button: Rect) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, send_button),
        Event::Paste(text) => Some(Action::Paste(text.replace(['\r', '\n'], " "))),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(Action::Quit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Insert(c)),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, send_button: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if send_button.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(Action::Submit)
        }
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    const BUTTON: Rect = Rect { x: 30, y: 9, width: 10, height: 3 };

    #[test]
    fn typing_and_submit_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char('a'), KeyModifiers::NONE), BUTTON),
            Some(Action::Insert('a'))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('A'), KeyModifiers::SHIFT), BUTTON),
            Some(Action::Insert('A'))
        );
        assert_eq!(
            map_event(&key(KeyCode::Enter, KeyModifiers::NONE), BUTTON),
            Some(Action::Submit)
        );
        assert_eq!(
            map_event(&key(KeyCode::Backspace, KeyModifiers::NONE), BUTTON),
            Some(Action::Backspace)
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            map_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), BUTTON),
            Some(Action::Quit)
        );
        assert_eq!(map_event(&key(KeyCode::Esc, KeyModifiers::NONE), BUTTON), Some(Action::Quit));
        assert_eq!(map_event(&key(KeyCode::Char('x'), KeyModifiers::CONTROL), BUTTON), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(release), BUTTON), None);
    }

    #[test]
    fn clicking_the_button_submits() {
        assert_eq!(map_event(&click(32, 10), BUTTON), Some(Action::Submit));
        assert_eq!(map_event(&click(5, 10), BUTTON), None);
        assert_eq!(map_event(&click(32, 2), BUTTON), None);
    }

    #[test]
    fn pasted_newlines_do_not_submit() {
        assert_eq!(
            map_event(&Event::Paste("save\nwater".into()), BUTTON),
            Some(Action::Paste("save water".into()))
        );
    }
}
