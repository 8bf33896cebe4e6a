pub mod first;
pub mod second;
pub mod third;
pub mod fourth;
pub mod fifth;

pub use first::FirstScreen;
pub use second::SecondScreen;
pub use third::ThirdScreen;
pub use fourth::FourthScreen;
pub use fifth::FifthScreen;

use crate::routes::AppRoute;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nav_nexus::Action;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Keys every screen shares: `Esc` is back, `Ctrl+C` quits.
pub(crate) fn common_keys(key: &KeyEvent) -> Option<Action<AppRoute>> {
    match key.code {
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// A key hint styled like a button.
pub(crate) fn button(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {key} "),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

pub(crate) fn back_button() -> Line<'static> {
    button("Esc", "Back")
}

/// Render `rows` as a vertically and horizontally centered column.
pub(crate) fn render_column(frame: &mut Frame, area: Rect, title: &str, rows: Vec<Line<'_>>) {
    let height = rows.len() as u16 + 2;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let column = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(column, middle);
}
