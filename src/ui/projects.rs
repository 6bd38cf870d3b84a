//! Projects section rendering

use crate::app::App;
use crate::config::ProjectCard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Card height: top border + name + description + tags + bottom border
const CARD_HEIGHT: u16 = 5;
/// Rows a card slides up while entering
const ENTRANCE_RISE: u16 = 2;

/// Draw the projects section as a card list with entrance animation
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let block = Block::default().title(" Projects ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let projects = &app.state.content.projects;
    if projects.is_empty() {
        let empty = Paragraph::new("Nothing here yet.").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Keep the selected card in view
    let visible_cards = ((inner.height / CARD_HEIGHT).max(1)) as usize;
    let first_visible = if app.state.selected_project < visible_cards {
        0
    } else {
        app.state.selected_project + 1 - visible_cards
    };
    for (index, project) in projects.iter().enumerate().skip(first_visible) {
        let row = (index - first_visible) as u16;
        let base_y = inner.y + row * CARD_HEIGHT;
        if base_y >= inner.y + inner.height {
            break;
        }

        // Entrance: each card rises into place while fading in
        let progress = app
            .state
            .reveal
            .as_ref()
            .map(|r| r.progress(index, now))
            .unwrap_or(1.0);
        if progress == 0.0 {
            continue;
        }
        let rise = ((1.0 - progress) * ENTRANCE_RISE as f32).round() as u16;
        let y = base_y + rise;
        let height = CARD_HEIGHT.min((inner.y + inner.height).saturating_sub(y));
        if height < 2 {
            continue;
        }

        let card_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        let is_selected = index == app.state.selected_project;
        draw_card(frame, card_area, project, is_selected, progress);
    }
}

fn draw_card(frame: &mut Frame, area: Rect, project: &ProjectCard, is_selected: bool, progress: f32) {
    let settled = progress >= 1.0;

    let border_style = if is_selected && settled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if settled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let body_style = if settled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tags = project
        .tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(Span::styled(project.name.as_str(), name_style)),
        Line::from(Span::styled(project.description.as_str(), body_style)),
        Line::from(Span::styled(tags, Style::default().fg(Color::DarkGray))),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}
