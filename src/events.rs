use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // The assistant overlay captures typing
    if app.show_chat {
        handle_chat_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Left => app.prev_view(),
        KeyCode::Right => app.next_view(),
        KeyCode::Char('1') => app.set_view(View::Live),
        KeyCode::Char('2') => app.set_view(View::History),
        KeyCode::Char('h') => app.toggle_history(),

        // Back to the live view
        KeyCode::Esc => app.set_view(View::Live),

        // Readings
        KeyCode::Char('r') => app.tick_now(),
        KeyCode::Char('p') => app.toggle_pause(),
        KeyCode::Char('m') => app.toggle_mute(),

        // Assistant
        KeyCode::Char('c') => app.open_chat(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => match app.export_csv() {
            Ok(rows) => {
                let message = format!("Saved {} readings to {}", rows, app.export_path.display());
                app.set_status_message(message);
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                app.set_status_message(format!("Export failed: {}", e));
            }
        },

        _ => {}
    }
}

/// Handle key input while the assistant overlay is open
fn handle_chat_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Ask
        KeyCode::Enter => app.submit_chat(),

        // Close (keeps the transcript)
        KeyCode::Esc => app.close_chat(),

        // Clear the input line
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_input.clear();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.close_chat();
        }

        KeyCode::Backspace => app.chat_pop(),

        // Type characters
        KeyCode::Char(c) => app.chat_push(c),

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.prev_view(),
        MouseEventKind::ScrollDown => app.next_view(),

        // Tab clicks (row 1, after header)
        MouseEventKind::Down(MouseButton::Left) if mouse.row == 1 => {
            // Approximate tab positions: Live (0-9), History (10-22)
            if mouse.column < 10 {
                app.set_view(View::Live);
            } else if mouse.column < 23 {
                app.set_view(View::History);
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::KeyEventState;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn test_view_keys() {
        let mut app = test_app();

        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.current_view, View::History);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.current_view, View::Live);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.current_view, View::History);
        handle_key_event(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.current_view, View::Live);
        handle_key_event(&mut app, key(KeyCode::Char('h')));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.current_view, View::Live);
    }

    #[tokio::test]
    async fn test_pause_and_mute_keys() {
        let mut app = test_app();

        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(app.paused);
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert!(app.muted);
        handle_key_event(&mut app, key(KeyCode::Char('p')));
        assert!(!app.paused);
    }

    #[tokio::test]
    async fn test_help_swallows_next_key() {
        let mut app = test_app();

        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);

        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_chat_captures_typing() {
        let mut app = test_app();

        handle_key_event(&mut app, key(KeyCode::Char('c')));
        assert!(app.show_chat);

        // 'q' and 'h' are text here, not commands
        for c in "how high".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        assert!(app.running);
        assert_eq!(app.current_view, View::Live);
        assert_eq!(app.chat_input, "how high");

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.chat_input, "how hig");
        handle_key_event(&mut app, key(KeyCode::Char('h')));
        handle_key_event(&mut app, key(KeyCode::Enter));

        let transcript = app.assistant.transcript();
        assert!(transcript.last().unwrap().1.starts_with("High blood sugar"));

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_chat);
        assert_eq!(app.assistant.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = test_app();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, event);
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_tab_click() {
        let mut app = test_app();
        handle_mouse_event(&mut app, click(12, 1));
        assert_eq!(app.current_view, View::History);
        handle_mouse_event(&mut app, click(2, 1));
        assert_eq!(app.current_view, View::Live);
        // Clicks outside the tab row are ignored
        handle_mouse_event(&mut app, click(12, 5));
        assert_eq!(app.current_view, View::Live);
    }
}
