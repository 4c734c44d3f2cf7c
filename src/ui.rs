pub mod analytics;
pub mod screen;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{app::AppState, App};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const MIN_BOX_WIDTH: u16 = 24;
const PLACEHOLDER: &str = "Start typing here!";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::Typing => render_typing(self, area, buf),
            // the analytics overlay is layered on top by its screen
            AppState::Results | AppState::Analytics => render_results(self, area, buf),
        }
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn score_line(app: &App) -> Line<'static> {
    let session = &app.session;
    Line::from(vec![
        Span::styled(
            format!("Score: {}/{}", session.score(), session.total_words()),
            bold(),
        ),
        Span::raw("   "),
        Span::styled(format!("WPM: {}", session.wpm()), bold().fg(Color::Magenta)),
    ])
}

/// A horizontally centered rect wide enough for `content_width`
fn centered_box(area: Rect, content_width: u16) -> Rect {
    let width = content_width.saturating_add(4).max(MIN_BOX_WIDTH).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn render_typing(app: &App, area: Rect, buf: &mut Buffer) {
    let session = &app.session;
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // score / wpm
            Constraint::Fill(1),
            Constraint::Length(1), // timer
            Constraint::Length(3), // current word
            Constraint::Length(3), // input
            Constraint::Fill(1),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled("Typing Game", bold().fg(Color::Cyan)))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    Paragraph::new(score_line(app))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let timer_style = if session.remaining_secs() <= 3 && session.has_started() {
        bold().fg(Color::Red)
    } else {
        bold()
    };
    Paragraph::new(Span::styled(
        format!("Timer: {}", session.remaining_secs()),
        timer_style,
    ))
    .alignment(Alignment::Center)
    .render(chunks[3], buf);

    // blank once the list is exhausted
    let word = session.current_word().unwrap_or_default();
    let typed = session.typed_buffer();
    let box_width = word.width().max(typed.width()).max(PLACEHOLDER.width()) as u16;

    Paragraph::new(Span::styled(word.to_string(), bold().fg(Color::White)))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .render(centered_box(chunks[4], box_width), buf);

    let input_line = if typed.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, dim_style.add_modifier(Modifier::ITALIC)))
    } else {
        let style = if word.starts_with(typed.trim_start()) {
            bold().fg(Color::Green)
        } else {
            bold().fg(Color::Red)
        };
        Line::from(vec![
            Span::styled(typed.to_string(), style),
            Span::styled("_", dim_style),
        ])
    };
    Paragraph::new(input_line)
        .block(Block::default().borders(Borders::ALL).border_style(dim_style))
        .render(centered_box(chunks[5], box_width), buf);

    Paragraph::new(Span::styled(
        "(space) submit word / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[7], buf);
}

fn render_results(app: &App, area: Rect, buf: &mut Buffer) {
    let session = &app.session;
    let green = Style::default().fg(Color::Black).bg(Color::Green);
    let red = Style::default().fg(Color::Black).bg(Color::Red);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // score / wpm
            Constraint::Length(1), // padding
            Constraint::Min(3),    // breakdown
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled("Typing Game", bold().fg(Color::Cyan)))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    Paragraph::new(score_line(app))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let breakdown = session.breakdown();
    let body = if breakdown.is_empty() {
        Line::from(Span::styled(
            "no words submitted",
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        ))
    } else {
        let words = breakdown.into_iter().map(|(word, correct)| {
            Span::styled(format!(" {word} "), if correct { green } else { red })
        });
        let spans = Itertools::intersperse(words, Span::raw(" ")).collect::<Vec<Span>>();
        Line::from(spans)
    };

    Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {}s ", session.elapsed_secs())),
        )
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);

    Paragraph::new(Span::styled(
        "(r)estart / (a)nalytics / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .render(chunks[4], buf);
}
