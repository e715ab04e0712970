use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use shelf_core::render::CardSet;
use shelf_core::{Book, Catalog, CatalogView, Category, CategoryFilter};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// What the app loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// State of the catalog browser
pub struct BrowseState {
    pub view: CatalogView<CardSet>,
    pub search_input: Input,
    /// Index into [`BrowseState::chips`]; 0 is "All"
    pub category_index: usize,
    /// Index into the visible list
    pub selected_index: usize,
}

impl BrowseState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            view: CatalogView::new(catalog, CardSet::new()),
            search_input: Input::default(),
            category_index: 0,
            selected_index: 0,
        }
    }

    /// Category chips in display order, "All" first
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.iter().cloned().map(CategoryFilter::Only))
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit
            }
            KeyCode::Tab => self.cycle_category(1),
            KeyCode::BackTab => self.cycle_category(-1),
            KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_index + 1 < self.view.visible().len() {
                    self.selected_index += 1;
                }
            }
            _ => {
                let before = self.search_input.value().to_string();
                self.search_input.handle_event(&Event::Key(key));
                if self.search_input.value() != before {
                    self.view.set_query(self.search_input.value());
                    self.selected_index = 0;
                }
            }
        }
        Action::Continue
    }

    /// Move the active chip forward or backward, wrapping around
    pub fn cycle_category(&mut self, step: isize) {
        let count = Self::chips().len() as isize;
        let next = (self.category_index as isize + step).rem_euclid(count);
        self.category_index = next as usize;

        let filter = Self::chips()
            .into_iter()
            .nth(self.category_index)
            .unwrap_or_default();
        self.view.select_category(filter);
        self.selected_index = 0;
    }

    /// Book under the cursor, if any are visible
    pub fn selected_book(&self) -> Option<&Book> {
        let id = self.view.visible().get(self.selected_index)?;
        self.view.catalog().get(*id)
    }
}
