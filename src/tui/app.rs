use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::{
    core::session::SessionController,
    domain::{
        config::SerTermConfig,
        error::{SerTermError, SerTermResult},
    },
    infrastructure::serial::{available_ports, SerialPortChannel},
};

use super::{
    event::{AppEvent, EventHandler},
    state::AppState,
    ui::draw_ui,
};

pub struct App {
    state: AppState,
    events: EventHandler,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    should_quit: bool,
    last_tick: Instant,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: SerTermConfig) -> SerTermResult<Self> {
        // Setup terminal
        enable_raw_mode().map_err(|e| SerTermError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| SerTermError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal =
            Terminal::new(backend).map_err(|e| SerTermError::Terminal(e.to_string()))?;

        // One controller, one channel, one display sink for the whole session
        let (display_tx, display_rx) = mpsc::unbounded_channel();
        let controller = SessionController::new(
            config.port.clone(),
            Box::new(SerialPortChannel::new()),
            display_tx,
        );

        let mut enumeration_error = None;
        let ports = match available_ports() {
            Ok(ports) => ports,
            Err(e) => {
                enumeration_error = Some(format!("Port discovery failed: {}", e));
                Vec::new()
            }
        };

        let mut state = AppState::new(&config, controller, display_rx, ports);
        if let Some(message) = enumeration_error {
            state.set_status_message(message);
        }

        Ok(Self {
            state,
            events: EventHandler::new(),
            terminal,
            should_quit: false,
            last_tick: Instant::now(),
            tick_rate: Duration::from_millis(config.global.poll_interval_ms.max(1)),
        })
    }

    pub async fn run(&mut self) -> SerTermResult<()> {
        loop {
            // Handle events
            if let Ok(true) = event::poll(self.tick_rate) {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) => {
                            if let Some(app_event) = self.events.handle_key_event(key, &self.state)
                            {
                                self.apply_event(app_event);
                            }
                        }
                        Event::Resize(width, height) => {
                            self.state.terminal_size = (width, height);
                        }
                        _ => {}
                    }
                }
            }

            // Tick
            if self.last_tick.elapsed() >= self.tick_rate {
                self.tick();
                self.last_tick = Instant::now();
            }

            // Draw UI
            self.terminal
                .draw(|f| draw_ui(f, &mut self.state))
                .map_err(|e| SerTermError::Terminal(e.to_string()))?;

            if self.should_quit {
                break;
            }
        }

        self.state.controller.disconnect();
        Ok(())
    }

    fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.state.controller.disconnect();
                self.should_quit = true;
            }
            AppEvent::Connect => match self.state.controller.connect() {
                Ok(()) => self.state.clear_status_message(),
                Err(e) => self.state.set_status_message(e.to_string()),
            },
            AppEvent::Disconnect => {
                self.state.controller.disconnect();
                self.state.clear_status_message();
            }
            AppEvent::ToggleHelp => self.state.toggle_help(),
            AppEvent::SelectNextRow => self.state.select_next_row(),
            AppEvent::SelectPreviousRow => self.state.select_previous_row(),
            AppEvent::CycleValue(direction) => self.state.cycle_selected_value(direction),
            AppEvent::ClearConsole => self.state.console.clear(),
            AppEvent::Transmit(bytes) => {
                if let Err(e) = self.state.controller.send(&bytes) {
                    self.state.set_status_message(e.to_string());
                }
            }
        }
    }

    fn tick(&mut self) {
        if self.state.controller.status().is_connected() {
            match self.state.controller.drain_incoming() {
                Ok(_) => {}
                Err(SerTermError::NotConnected) => {}
                Err(e) => {
                    // A dead link tears the session down; no reconnection
                    self.state
                        .set_status_message(format!("Read failed: {}", e));
                    self.state.controller.disconnect();
                }
            }
        }

        self.state.drain_display();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
