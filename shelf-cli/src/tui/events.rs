use ratatui::crossterm::event::KeyEvent;

/// All possible events in the browser
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}
