use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::{state::AppState, ui::centered_rect};

pub fn render_help_popup(f: &mut Frame, area: Rect, _state: &AppState) {
    let popup_area = centered_rect(70, 80, area);

    // Clear the background
    f.render_widget(Clear, popup_area);

    let help_content = vec![
        Line::from("serterm - Help"),
        Line::from(""),
        Line::from("While disconnected:"),
        Line::from("  ↑ / ↓ (k / j)  - Select a setting"),
        Line::from("  ← / →          - Change its value"),
        Line::from("  Enter / c      - Connect with the current settings"),
        Line::from("  h / F1         - Toggle this help"),
        Line::from("  q / Esc        - Quit"),
        Line::from(""),
        Line::from("While connected:"),
        Line::from("  Every key goes to the port: characters as typed,"),
        Line::from("  Enter as CR, Tab, Esc, and Ctrl+letter as control"),
        Line::from("  bytes. Arrow keys and backspace are ignored."),
        Line::from(""),
        Line::from("  Ctrl+D   - Disconnect"),
        Line::from("  Ctrl+L   - Clear the console"),
        Line::from("  Ctrl+Q   - Quit"),
        Line::from("  F1       - Toggle this help"),
        Line::from(""),
        Line::from("Incoming bytes appear in the console; the scrollback"),
        Line::from("keeps the most recent lines only."),
    ];

    let help = Paragraph::new(help_content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(help, popup_area);
}
