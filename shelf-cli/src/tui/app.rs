use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal,
};
use shelf_core::Catalog;
use std::time::Duration;
use tokio::time;

use super::events::AppEvent;
use super::state::{Action, BrowseState};
use super::theme::Theme;

/// Main application struct
pub struct App {
    state: BrowseState,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: BrowseState::new(catalog),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        // Terminal reads block, so they get their own thread. Polling lets the
        // thread exit once the main loop drops the receiver.
        tokio::task::spawn_blocking(move || loop {
            if event_tx.is_closed() {
                break;
            }
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => break,
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if event_tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    if event_tx.send(AppEvent::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| super::screen::render(frame, &self.state, &self.theme))?;

            match time::timeout(Duration::from_millis(250), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break,
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                if self.state.handle_key(key) == Action::Quit {
                    tracing::debug!("Quit requested");
                    self.should_quit = true;
                }
            }
            AppEvent::Resize(width, height) => {
                tracing::trace!(width, height, "Terminal resized");
            }
            AppEvent::Tick => {}
        }
    }
}
