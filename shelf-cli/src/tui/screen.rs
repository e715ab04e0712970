//! Catalog browser screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::state::BrowseState;
use super::theme::Theme;

pub fn render(frame: &mut Frame, state: &BrowseState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Categories
            Constraint::Length(3), // Search bar
            Constraint::Min(8),    // Books
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_chips(frame, chunks[0], state, theme);
    render_search_bar(frame, chunks[1], state, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_book_list(frame, body[0], state, theme);
    render_details(frame, body[1], state, theme);
    render_help(frame, chunks[3]);
}

fn render_chips(frame: &mut Frame, area: Rect, state: &BrowseState, theme: &Theme) {
    let titles: Vec<String> = BrowseState::chips()
        .iter()
        .map(|chip| chip.label().to_string())
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.category_index)
        .style(theme.muted)
        .highlight_style(theme.highlight)
        .block(Block::default().title(" Queer Shelf ").borders(Borders::ALL));

    frame.render_widget(tabs, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowseState, theme: &Theme) {
    let visible = state.view.recompute();
    let input = Paragraph::new(Line::from(vec![
        Span::raw("Search: "),
        Span::styled(state.search_input.value(), theme.focused),
        Span::styled("█", Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(format!(" {} ", visible.summary())).right_aligned()),
    );

    frame.render_widget(input, area);
}

fn render_book_list(frame: &mut Frame, area: Rect, state: &BrowseState, theme: &Theme) {
    let visible = state.view.recompute();
    let block = Block::default().title(" Books ").borders(Borders::ALL);

    if visible.is_empty() {
        let empty = Paragraph::new(visible.empty_state_message())
            .style(theme.empty_state)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .books()
        .iter()
        .map(|book| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(theme.category_color(&book.category))),
                Span::raw(book.title.clone()),
                Span::styled(format!("  {}", book.author), theme.muted),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_details(frame: &mut Frame, area: Rect, state: &BrowseState, theme: &Theme) {
    let block = Block::default().title(" Details ").borders(Borders::ALL);

    let Some(book) = state.selected_book() else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(book.title.clone(), theme.highlight)),
        Line::from(format!("by {}", book.author)),
        Line::from(Span::styled(
            book.category.label().to_string(),
            Style::default().fg(theme.category_color(&book.category)),
        )),
        Line::from(""),
    ];
    if !book.description.is_empty() {
        lines.push(Line::from(book.description.clone()));
    }
    if let Some(cover) = &book.cover_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("Cover: {cover}"), theme.muted)));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(details, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![
        Span::raw(" "),
        Span::styled("Type", Style::default().fg(Color::Cyan)),
        Span::raw(" Search  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Tab/Shift+Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" Category  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" Move  "),
        Span::styled("•", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(help_text).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(help, area);
}
