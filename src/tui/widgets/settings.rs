use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::tui::state::{AppState, SettingsRow};

/// Settings panel shown while disconnected: one row per line parameter,
/// Left/Right cycles the highlighted value.
pub fn render_settings_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = SettingsRow::ALL
        .iter()
        .map(|&row| {
            let selected = row == state.selected_row;
            let value = row_value(state, row);

            let marker = if selected { "▸ " } else { "  " };
            let label_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value_style = if row == SettingsRow::Port && state.ports.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:<14}", marker, row.label()), label_style),
                Span::styled(value, value_style),
            ]))
        })
        .collect();

    let panel = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Settings - ↑/↓ select, ←/→ change, Enter connect"),
    );

    f.render_widget(panel, area);
}

fn row_value(state: &AppState, row: SettingsRow) -> String {
    let settings = state.controller.settings();
    match row {
        SettingsRow::Port => {
            if state.ports.is_empty() {
                "no ports detected".to_string()
            } else if settings.port_name.is_empty() {
                "select a port".to_string()
            } else {
                settings.port_name.clone()
            }
        }
        SettingsRow::BaudRate => settings.baud_rate.to_string(),
        SettingsRow::DataBits => settings.data_bits.to_string(),
        SettingsRow::Parity => settings.parity.to_string(),
        SettingsRow::StopBits => settings.stop_bits.to_string(),
        SettingsRow::FlowControl => settings.flow_control.to_string(),
    }
}
