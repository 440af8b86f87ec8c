use tokio::sync::mpsc;

use crate::{
    core::session::SessionController,
    domain::config::{
        DataBits, FlowControl, Parity, SerTermConfig, StopBits, STANDARD_BAUD_RATES,
    },
    infrastructure::serial::PortInfo,
};

use super::widgets::console::ConsoleBuffer;

/// Rows of the settings panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Port,
    BaudRate,
    DataBits,
    Parity,
    StopBits,
    FlowControl,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 6] = [
        SettingsRow::Port,
        SettingsRow::BaudRate,
        SettingsRow::DataBits,
        SettingsRow::Parity,
        SettingsRow::StopBits,
        SettingsRow::FlowControl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::Port => "Port",
            SettingsRow::BaudRate => "Baud Rate",
            SettingsRow::DataBits => "Data Bits",
            SettingsRow::Parity => "Parity",
            SettingsRow::StopBits => "Stop Bits",
            SettingsRow::FlowControl => "Flow Control",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&row| row == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Direction a value row is cycled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

pub struct AppState {
    /// The session controller owning settings, status, and the channel
    pub controller: SessionController,
    /// Receiving end of the controller's display sink
    pub incoming: mpsc::UnboundedReceiver<Vec<u8>>,
    /// Scrollback console
    pub console: ConsoleBuffer,
    /// Ports discovered at startup; empty disables port selection
    pub ports: Vec<PortInfo>,
    /// Selected settings row
    pub selected_row: SettingsRow,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(
        config: &SerTermConfig,
        controller: SessionController,
        incoming: mpsc::UnboundedReceiver<Vec<u8>>,
        ports: Vec<PortInfo>,
    ) -> Self {
        Self {
            controller,
            incoming,
            console: ConsoleBuffer::new(config.global.scrollback_lines),
            ports,
            selected_row: SettingsRow::Port,
            status_message: None,
            show_help: false,
            terminal_size: (80, 24),
        }
    }

    /// Title line mirroring the connection state
    pub fn title(&self) -> String {
        let status = self.controller.status();
        if status.is_connected() {
            format!(
                "serterm - Connected on {}",
                self.controller.settings().port_name
            )
        } else if status.is_disconnected() {
            if self.ports.is_empty() {
                "serterm - Unable to Detect Any Ports".to_string()
            } else {
                "serterm - Disconnected".to_string()
            }
        } else {
            "serterm - Connecting...".to_string()
        }
    }

    /// Move received chunks from the display sink into the console
    pub fn drain_display(&mut self) {
        while let Ok(chunk) = self.incoming.try_recv() {
            self.console.append_chunk(&chunk);
        }
    }

    pub fn select_next_row(&mut self) {
        self.selected_row = self.selected_row.next();
    }

    pub fn select_previous_row(&mut self) {
        self.selected_row = self.selected_row.previous();
    }

    /// Cycle the selected row's value. Port selection is disabled when no
    /// ports were detected at startup.
    pub fn cycle_selected_value(&mut self, direction: CycleDirection) {
        match self.selected_row {
            SettingsRow::Port => self.cycle_port(direction),
            SettingsRow::BaudRate => self.cycle_baud_rate(direction),
            SettingsRow::DataBits => {
                let next = cycle_slice(
                    &[DataBits::Five, DataBits::Six, DataBits::Seven, DataBits::Eight],
                    self.controller.settings().data_bits,
                    direction,
                );
                self.controller.set_data_bits(next);
            }
            SettingsRow::Parity => {
                let next = cycle_slice(
                    &[Parity::None, Parity::Even, Parity::Odd],
                    self.controller.settings().parity,
                    direction,
                );
                self.controller.set_parity(next);
            }
            SettingsRow::StopBits => {
                let next = cycle_slice(
                    &[StopBits::One, StopBits::Two],
                    self.controller.settings().stop_bits,
                    direction,
                );
                self.controller.set_stop_bits(next);
            }
            SettingsRow::FlowControl => {
                let next = cycle_slice(
                    &[FlowControl::None, FlowControl::Hardware, FlowControl::Software],
                    self.controller.settings().flow_control,
                    direction,
                );
                self.controller.set_flow_control(next);
            }
        }
    }

    fn cycle_port(&mut self, direction: CycleDirection) {
        if self.ports.is_empty() {
            self.set_status_message("No serial ports detected".to_string());
            return;
        }

        let current = self
            .ports
            .iter()
            .position(|port| port.name == self.controller.settings().port_name);
        let count = self.ports.len();

        let next = match (current, direction) {
            (Some(i), CycleDirection::Forward) => (i + 1) % count,
            (Some(i), CycleDirection::Backward) => (i + count - 1) % count,
            (None, CycleDirection::Forward) => 0,
            (None, CycleDirection::Backward) => count - 1,
        };

        let name = self.ports[next].name.clone();
        self.controller.set_port_name(name);
    }

    fn cycle_baud_rate(&mut self, direction: CycleDirection) {
        let current = self.controller.settings().baud_rate;
        let rates = &STANDARD_BAUD_RATES;

        let next = match rates.iter().position(|&rate| rate == current) {
            Some(i) => match direction {
                CycleDirection::Forward => rates[(i + 1) % rates.len()],
                CycleDirection::Backward => rates[(i + rates.len() - 1) % rates.len()],
            },
            // A custom rate from the CLI or config snaps to the nearest
            // standard one in the requested direction
            None => match direction {
                CycleDirection::Forward => *rates
                    .iter()
                    .find(|&&rate| rate > current)
                    .unwrap_or(&rates[0]),
                CycleDirection::Backward => *rates
                    .iter()
                    .rev()
                    .find(|&&rate| rate < current)
                    .unwrap_or(&rates[rates.len() - 1]),
            },
        };

        // Standard rates are never zero, so this cannot fail
        let _ = self.controller.set_baud_rate(next);
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

fn cycle_slice<T: Copy + PartialEq>(values: &[T], current: T, direction: CycleDirection) -> T {
    let count = values.len();
    let position = values.iter().position(|&v| v == current).unwrap_or(0);
    match direction {
        CycleDirection::Forward => values[(position + 1) % count],
        CycleDirection::Backward => values[(position + count - 1) % count],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{Channel, SessionController};
    use crate::domain::{config::PortSettings, error::SerTermResult};

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

    fn test_state(ports: Vec<PortInfo>) -> AppState {
        let config = SerTermConfig::default();
        let (display_tx, display_rx) = mpsc::unbounded_channel();
        let controller = SessionController::new(
            config.port.clone(),
            Box::new(NullChannel),
            display_tx,
        );
        AppState::new(&config, controller, display_rx, ports)
    }

    fn two_ports() -> Vec<PortInfo> {
        vec![
            PortInfo {
                name: "/dev/ttyUSB0".to_string(),
                kind: "USB".to_string(),
            },
            PortInfo {
                name: "/dev/ttyUSB1".to_string(),
                kind: "USB".to_string(),
            },
        ]
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut state = test_state(Vec::new());
        assert_eq!(state.selected_row, SettingsRow::Port);

        state.select_previous_row();
        assert_eq!(state.selected_row, SettingsRow::FlowControl);

        state.select_next_row();
        assert_eq!(state.selected_row, SettingsRow::Port);
    }

    #[test]
    fn test_port_cycling() {
        let mut state = test_state(two_ports());

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().port_name, "/dev/ttyUSB0");

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().port_name, "/dev/ttyUSB1");

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().port_name, "/dev/ttyUSB0");
    }

    #[test]
    fn test_port_cycling_disabled_without_ports() {
        let mut state = test_state(Vec::new());
        state.cycle_selected_value(CycleDirection::Forward);

        assert_eq!(state.controller.settings().port_name, "");
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_baud_cycling_through_standard_rates() {
        let mut state = test_state(Vec::new());
        state.selected_row = SettingsRow::BaudRate;
        assert_eq!(state.controller.settings().baud_rate, 2400);

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().baud_rate, 4800);

        state.cycle_selected_value(CycleDirection::Backward);
        state.cycle_selected_value(CycleDirection::Backward);
        assert_eq!(state.controller.settings().baud_rate, 1200);

        state.cycle_selected_value(CycleDirection::Backward);
        assert_eq!(state.controller.settings().baud_rate, 115200);
    }

    #[test]
    fn test_custom_baud_snaps_to_standard() {
        let mut state = test_state(Vec::new());
        state.controller.set_baud_rate(14400).unwrap();
        state.selected_row = SettingsRow::BaudRate;

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().baud_rate, 19200);

        state.controller.set_baud_rate(14400).unwrap();
        state.cycle_selected_value(CycleDirection::Backward);
        assert_eq!(state.controller.settings().baud_rate, 9600);
    }

    #[test]
    fn test_parity_cycling() {
        let mut state = test_state(Vec::new());
        state.selected_row = SettingsRow::Parity;

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().parity, Parity::Even);

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().parity, Parity::Odd);

        state.cycle_selected_value(CycleDirection::Forward);
        assert_eq!(state.controller.settings().parity, Parity::None);
    }

    #[test]
    fn test_title_states() {
        let mut state = test_state(two_ports());
        assert_eq!(state.title(), "serterm - Disconnected");

        state.cycle_selected_value(CycleDirection::Forward);
        state.controller.connect().unwrap();
        assert_eq!(state.title(), "serterm - Connected on /dev/ttyUSB0");

        let no_ports = test_state(Vec::new());
        assert_eq!(no_ports.title(), "serterm - Unable to Detect Any Ports");
    }

    #[test]
    fn test_drain_display_feeds_console() {
        let config = SerTermConfig::default();
        let (display_tx, display_rx) = mpsc::unbounded_channel();
        let controller = SessionController::new(
            config.port.clone(),
            Box::new(NullChannel),
            display_tx.clone(),
        );
        let mut state = AppState::new(&config, controller, display_rx, Vec::new());

        display_tx.send(b"boot ok\n".to_vec()).unwrap();
        state.drain_display();

        let lines: Vec<&str> = state.console.lines().collect();
        assert_eq!(lines, vec!["boot ok"]);
    }
}
