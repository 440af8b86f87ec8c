use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{
    input::encode_key,
    state::{AppState, CycleDirection},
};

/// Actions produced from raw key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    Connect,
    Disconnect,
    ToggleHelp,
    SelectNextRow,
    SelectPreviousRow,
    CycleValue(CycleDirection),
    ClearConsole,
    Transmit(Vec<u8>),
}

pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a keypress to an action.
    ///
    /// While connected the terminal is a dumb relay: everything that encodes
    /// to bytes goes to the port, with only Ctrl+Q (quit), Ctrl+D
    /// (disconnect), Ctrl+L (clear console), and F1 (help) kept local. While
    /// disconnected the keys drive the settings panel.
    pub fn handle_key_event(&self, key: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if state.show_help {
            return match key.code {
                KeyCode::Char('h') | KeyCode::Esc | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if state.controller.status().is_connected() {
            self.handle_connected(key)
        } else {
            self.handle_disconnected(key)
        }
    }

    fn handle_connected(&self, key: KeyEvent) -> Option<AppEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return Some(AppEvent::Quit),
                KeyCode::Char('d') | KeyCode::Char('D') => return Some(AppEvent::Disconnect),
                KeyCode::Char('l') | KeyCode::Char('L') => return Some(AppEvent::ClearConsole),
                _ => {}
            }
        }

        if key.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        encode_key(key).map(AppEvent::Transmit)
    }

    fn handle_disconnected(&self, key: KeyEvent) -> Option<AppEvent> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('h') | KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::SelectPreviousRow),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::SelectNextRow),
            KeyCode::Left => Some(AppEvent::CycleValue(CycleDirection::Backward)),
            KeyCode::Right => Some(AppEvent::CycleValue(CycleDirection::Forward)),
            KeyCode::Enter | KeyCode::Char('c') => Some(AppEvent::Connect),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{Channel, SessionController};
    use crate::domain::config::{PortSettings, SerTermConfig};
    use crate::domain::error::SerTermResult;
    use tokio::sync::mpsc;

    struct NullChannel;

    impl Channel for NullChannel {
        fn open(&mut self, _settings: &PortSettings) -> SerTermResult<()> {
            Ok(())
        }
        fn write(&mut self, _data: &[u8]) -> SerTermResult<()> {
            Ok(())
        }
        fn read_available(&mut self) -> SerTermResult<Vec<u8>> {
            Ok(Vec::new())
        }
        fn flush(&mut self) -> SerTermResult<()> {
            Ok(())
        }
        fn close(&mut self) -> SerTermResult<()> {
            Ok(())
        }
    }

    fn disconnected_state() -> AppState {
        let config = SerTermConfig::default();
        let (display_tx, display_rx) = mpsc::unbounded_channel();
        let controller =
            SessionController::new(config.port.clone(), Box::new(NullChannel), display_tx);
        AppState::new(&config, controller, display_rx, Vec::new())
    }

    fn connected_state() -> AppState {
        let mut state = disconnected_state();
        state.controller.set_port_name("/dev/ttyUSB0");
        state.controller.connect().unwrap();
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_disconnected_bindings() {
        let handler = EventHandler::new();
        let state = disconnected_state();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::Quit)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up), &state),
            Some(AppEvent::SelectPreviousRow)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right), &state),
            Some(AppEvent::CycleValue(CycleDirection::Forward))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::Connect)
        );
    }

    #[test]
    fn test_disconnected_keys_do_not_transmit() {
        let handler = EventHandler::new();
        let state = disconnected_state();

        // 'x' is not a binding, and nothing may go to the wire while closed
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x')), &state), None);
    }

    #[test]
    fn test_connected_keys_transmit() {
        let handler = EventHandler::new();
        let state = connected_state();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('A')), &state),
            Some(AppEvent::Transmit(vec![0x41]))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::Transmit(vec![b'\r']))
        );
        // 'q' without a modifier is data, not quit
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::Transmit(vec![b'q']))
        );
    }

    #[test]
    fn test_connected_navigation_keys_swallowed() {
        let handler = EventHandler::new();
        let state = connected_state();

        assert_eq!(handler.handle_key_event(key(KeyCode::Left), &state), None);
        assert_eq!(handler.handle_key_event(key(KeyCode::Up), &state), None);
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Backspace), &state),
            None
        );
    }

    #[test]
    fn test_reserved_chords_stay_local() {
        let handler = EventHandler::new();
        let state = connected_state();

        assert_eq!(
            handler.handle_key_event(ctrl('q'), &state),
            Some(AppEvent::Quit)
        );
        assert_eq!(
            handler.handle_key_event(ctrl('d'), &state),
            Some(AppEvent::Disconnect)
        );
        assert_eq!(
            handler.handle_key_event(ctrl('l'), &state),
            Some(AppEvent::ClearConsole)
        );
        // Unreserved control chords become control bytes
        assert_eq!(
            handler.handle_key_event(ctrl('c'), &state),
            Some(AppEvent::Transmit(vec![0x03]))
        );
    }

    #[test]
    fn test_help_screen_captures_keys() {
        let handler = EventHandler::new();
        let mut state = connected_state();
        state.toggle_help();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::F(1)), &state),
            Some(AppEvent::ToggleHelp)
        );
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('A')), &state), None);
    }
}
