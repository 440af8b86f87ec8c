use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a keypress into the bytes it puts on the wire.
///
/// Characters are encoded as UTF-8, the local text encoding. Enter becomes a
/// carriage return, Ctrl+letter the matching control byte. Navigation keys
/// (arrows, backspace, and everything else without a byte representation)
/// return `None` and never reach the port.
pub fn encode_key(key: KeyEvent) -> Option<Vec<u8>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                Some(vec![(c.to_ascii_lowercase() as u8) & 0x1f])
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            Some(c.encode_utf8(&mut buf).as_bytes().to_vec())
        }
        KeyCode::Enter => Some(vec![b'\r']),
        KeyCode::Tab => Some(vec![b'\t']),
        KeyCode::Esc => Some(vec![0x1b]),
        _ => None,
    }
}
