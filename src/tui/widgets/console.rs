use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::collections::VecDeque;

use crate::tui::state::AppState;

/// Forced wrap point for lines that never see a newline
const MAX_LINE_WIDTH: usize = 512;

/// Bounded scrollback holding the text received from the port.
///
/// Bytes are rendered one to a glyph: printable ASCII and Latin-1 ranges map
/// to their characters, LF commits the current line, CR is swallowed, other
/// control bytes are dropped. When the cap is reached the oldest line goes
/// first.
#[derive(Debug)]
pub struct ConsoleBuffer {
    lines: VecDeque<String>,
    current: String,
    max_lines: usize,
}

impl ConsoleBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            current: String::new(),
            max_lines: max_lines.max(1),
        }
    }

    /// Append one received chunk to the scrollback
    pub fn append_chunk(&mut self, data: &[u8]) {
        for &byte in data {
            match byte {
                b'\n' => self.commit_line(),
                b'\r' => {}
                b'\t' => self.push_char(' '),
                0x20..=0x7e | 0xa0..=0xff => self.push_char(char::from(byte)),
                _ => {}
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.current.clear();
    }

    /// Committed lines currently held, oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// The line still being received, empty between lines
    pub fn partial_line(&self) -> &str {
        &self.current
    }

    fn push_char(&mut self, c: char) {
        if self.current.chars().count() >= MAX_LINE_WIDTH {
            self.commit_line();
        }
        self.current.push(c);
    }

    fn commit_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }
}

pub fn render_console(f: &mut Frame, area: Rect, state: &AppState) {
    let connected = state.controller.status().is_connected();

    // Show the newest lines that fit, including the one still being received
    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<&str> = state.console.lines().collect();
    if !state.console.partial_line().is_empty() {
        lines.push(state.console.partial_line());
    }
    let skip = lines.len().saturating_sub(visible);

    let text_style = if connected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(skip)
        .map(|line| ListItem::new(Line::from(line)).style(text_style))
        .collect();

    let console = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Console")
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(console, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_split_on_newline() {
        let mut console = ConsoleBuffer::new(100);
        console.append_chunk(b"hello\nwor");
        console.append_chunk(b"ld\n");

        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines, vec!["hello", "world"]);
        assert_eq!(console.partial_line(), "");
    }

    #[test]
    fn test_carriage_return_swallowed() {
        let mut console = ConsoleBuffer::new(100);
        console.append_chunk(b"one\r\ntwo\r\n");

        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_partial_line_retained() {
        let mut console = ConsoleBuffer::new(100);
        console.append_chunk(b"pro");
        assert_eq!(console.partial_line(), "pro");
        assert_eq!(console.line_count(), 0);

        console.append_chunk(b"mpt> ");
        assert_eq!(console.partial_line(), "prompt> ");
    }

    #[test]
    fn test_cap_discards_oldest_first() {
        let mut console = ConsoleBuffer::new(3);
        for i in 0..10 {
            console.append_chunk(format!("line {}\n", i).as_bytes());
        }

        assert_eq!(console.line_count(), 3);
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines, vec!["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_control_bytes_dropped() {
        let mut console = ConsoleBuffer::new(100);
        console.append_chunk(&[0x07, b'o', 0x00, b'k', 0x1b]);
        assert_eq!(console.partial_line(), "ok");
    }

    #[test]
    fn test_latin1_range_rendered() {
        let mut console = ConsoleBuffer::new(100);
        console.append_chunk(&[0xe9, b'\n']);
        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines, vec!["é"]);
    }

    #[test]
    fn test_endless_stream_wraps() {
        let mut console = ConsoleBuffer::new(5);
        console.append_chunk(&[b'x'; 2000]);

        assert!(console.line_count() <= console.max_lines());
        assert!(console.partial_line().chars().count() <= 512);
    }
}
