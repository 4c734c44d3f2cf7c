use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Widget},
};

use crate::{app::AnalyticsTab, App};

/// Popup with one tab per judgment, listing the words that got it
pub fn render_analytics(app: &App, area: Rect, buf: &mut Buffer) {
    let session = &app.session;
    let correct: Vec<&str> = session.correct_words().iter().map(String::as_str).collect();
    let wrong = session.wrong_words();

    let popup = popup_area(area, 60, 70);
    Clear.render(popup, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Analytics ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    block.render(popup, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tabs
            Constraint::Min(1),    // words
            Constraint::Length(1), // legend
        ])
        .split(inner);

    let titles = AnalyticsTab::ALL.iter().map(|tab| {
        let count = match tab {
            AnalyticsTab::Correct => correct.len(),
            AnalyticsTab::Wrong => wrong.len(),
        };
        Line::from(format!("{tab} ({count})"))
    });
    Tabs::new(titles)
        .select(app.analytics_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::default().borders(Borders::BOTTOM))
        .render(chunks[0], buf);

    let (words, color) = match app.analytics_tab {
        AnalyticsTab::Correct => (&correct, Color::Green),
        AnalyticsTab::Wrong => (&wrong, Color::Red),
    };

    if words.is_empty() {
        Paragraph::new("nothing here")
            .style(Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM))
            .render(chunks[1], buf);
    } else {
        let items: Vec<ListItem> = words
            .iter()
            .map(|w| ListItem::new(w.to_string()).style(Style::default().fg(color)))
            .collect();
        List::new(items).render(chunks[1], buf);
    }

    Paragraph::new("(←/→) switch tab / (esc) close / (r)estart")
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .render(chunks[2], buf);
}

/// Centered rect taking the given percentages of `area`
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(vertical);
    popup
}
