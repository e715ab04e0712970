use ratatui::style::{Color, Modifier, Style};
use shelf_core::Category;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub focused: Style,
    pub muted: Style,
    pub highlight: Style,
    pub empty_state: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .bg(Color::Rgb(60, 40, 90))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            empty_state: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl Theme {
    /// Badge color for a category
    pub fn category_color(&self, category: &Category) -> Color {
        match category {
            Category::Fiction => Color::Red,
            Category::History => Color::Rgb(255, 140, 0),
            Category::Biography => Color::Yellow,
            Category::Memoir => Color::Green,
            Category::Poetry => Color::Blue,
            Category::Nonfiction => Color::Magenta,
            Category::YoungAdult => Color::Cyan,
            Category::GraphicNovel => Color::LightMagenta,
            Category::Other(_) => Color::Gray,
        }
    }
}
