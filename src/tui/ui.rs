use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{
    state::AppState,
    widgets::{
        console::render_console, help::render_help_popup, settings::render_settings_panel,
        status::render_status_bar,
    },
};

pub fn draw_ui(f: &mut Frame, state: &mut AppState) {
    let size = f.size();
    state.terminal_size = (size.width, size.height);

    let connected = state.controller.status().is_connected();

    // Settings panel only exists while disconnected, like the original
    // menu bar that locks once the port opens
    let constraints = if connected {
        vec![
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Console
            Constraint::Length(1), // Status bar
        ]
    } else {
        vec![
            Constraint::Length(1),                      // Title
            Constraint::Min(0),                         // Console
            Constraint::Length(SETTINGS_PANEL_HEIGHT),  // Settings
            Constraint::Length(1),                      // Status bar
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_title(f, chunks[0], state);
    render_console(f, chunks[1], state);

    if connected {
        render_status_bar(f, chunks[2], state);
    } else {
        render_settings_panel(f, chunks[2], state);
        render_status_bar(f, chunks[3], state);
    }

    if state.show_help {
        render_help_popup(f, size, state);
    }
}

// Six settings rows plus the panel border
const SETTINGS_PANEL_HEIGHT: u16 = 8;

fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.controller.status().is_connected() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let title = Paragraph::new(Line::from(state.title())).style(style);
    f.render_widget(title, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
