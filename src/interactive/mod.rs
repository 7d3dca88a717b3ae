use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::api::DirectoryClient;

pub mod constants;
mod domain;
pub mod ui;


use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use self::domain::models::{FetchRequest, FetchResponse, LoadState};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// Interactive directory browser. One fetch worker services load
/// requests; the event loop owns every other piece of state.
pub struct PatientBrowser {
    state: AppState,
    renderer: Renderer,
    client: Arc<DirectoryClient>,
    fetch_sender: Option<Sender<FetchRequest>>,
    fetch_receiver: Option<Receiver<FetchResponse>>,
    last_ctrl_c_press: Option<Instant>,
}

impl PatientBrowser {
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            client: Arc::new(client),
            fetch_sender: None,
            fetch_receiver: None,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        // Start the fetch worker thread
        let (tx, rx) = self.start_fetch_worker();
        self.fetch_sender = Some(tx);
        self.fetch_receiver = Some(rx);

        // Initial load; the fresh state already renders as Loading
        self.execute_command(Command::ExecuteFetch);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Apply settled fetches; the reducer drops stale generations
            if let Some(receiver) = &self.fetch_receiver {
                if let Ok(response) = receiver.try_recv() {
                    let msg = Message::FetchSettled(response.generation, response.result);
                    self.handle_message(msg);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let should_quit = self.handle_input(key)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Double Ctrl+C to exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some("Press Ctrl+C again to exit".to_string());
            return Ok(false);
        }
        self.state.ui.message = None;

        match key.code {
            KeyCode::Esc => return Ok(true),
            // Ctrl+R starts a new load generation, the "page reload"
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_message(Message::ReloadRequested);
                return Ok(false);
            }
            _ => {}
        }

        // Filter, sort and table controls only exist once loaded
        if !matches!(self.state.load, LoadState::Loaded(_)) {
            return Ok(false);
        }

        let message = match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.renderer.sort_selector_mut().handle_key(key),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.patient_table_mut().handle_key(key)
            }
            _ => self.renderer.filter_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteFetch => self.execute_fetch(),
        }
    }

    fn execute_fetch(&mut self) {
        if let Some(sender) = &self.fetch_sender {
            let request = FetchRequest {
                generation: self.state.generation,
            };
            let _ = sender.send(request);
        }
    }

    fn start_fetch_worker(&self) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();
        let client = self.client.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = client.fetch_patients();
                let _ = response_tx.send(FetchResponse {
                    generation: request.generation,
                    result,
                });
            }
        });

        (request_tx, response_rx)
    }
}
