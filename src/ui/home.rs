//! Home section rendering

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content = &app.state.content;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name + tagline
            Constraint::Length(4), // Stats row
            Constraint::Min(0),    // About text
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            content.owner.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content.tagline.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(header).block(Block::default().borders(Borders::NONE)),
        chunks[0],
    );

    draw_stats(frame, chunks[1], app);

    let about: Vec<Line> = content
        .about
        .iter()
        .flat_map(|paragraph| {
            vec![Line::from(paragraph.as_str()), Line::from("")]
        })
        .collect();
    let about_widget = Paragraph::new(about)
        .wrap(Wrap { trim: false })
        .scroll((app.state.home_scroll, 0))
        .block(Block::default().title(" About ").borders(Borders::ALL));
    frame.render_widget(about_widget, chunks[2]);
}

/// Draw the headline stats side by side
fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let stats = &app.state.content.stats;
    if stats.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.label.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            *cell,
        );
    }
}
