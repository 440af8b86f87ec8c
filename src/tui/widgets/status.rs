use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::AppState;

/// Status bar mirroring the current line parameters, with transient messages
/// taking priority.
pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let (status_text, status_style) = if let Some(message) = &state.status_message {
        (message.clone(), Style::default().fg(Color::Yellow))
    } else {
        let settings = state.controller.settings();
        let port = if settings.port_name.is_empty() {
            "N/A"
        } else {
            settings.port_name.as_str()
        };
        (
            format!(
                " Port: {} | Baud Rate: {} | Data Bits: {} | Parity: {} | Stop Bits: {} | Flow Control: {} | F1 Help",
                port,
                settings.baud_rate,
                settings.data_bits,
                settings.parity,
                settings.stop_bits,
                settings.flow_control
            ),
            Style::default().fg(Color::Gray),
        )
    };

    let status = Paragraph::new(Line::from(vec![Span::styled(status_text, status_style)]));

    f.render_widget(status, area);
}
