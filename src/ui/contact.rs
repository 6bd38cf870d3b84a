//! Contact section rendering: the form, inline field errors, and the
//! Clear/Send button row

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A single-line field plus its error line
const FIELD_HEIGHT: u16 = 4;

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Intro line
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Subject
            Constraint::Min(6),               // Message + error line
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(area);

    let intro = Line::from(vec![
        Span::raw(" Get in touch: "),
        Span::styled(
            app.state.content.contact_address.as_str(),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    let active = form.active_field();
    draw_field(frame, chunks[1], &form.name, active == 0);
    draw_field(frame, chunks[2], &form.email, active == 1);
    draw_field(frame, chunks[3], &form.subject, active == 2);
    draw_field(frame, chunks[4], &form.message, active == 3);

    draw_buttons(frame, chunks[5], app);
}

/// Draw a form field with its error line underneath
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let input_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    let has_error = field.error.is_some();
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let label = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), input_area);

    if let Some(error) = field.error {
        let error_line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), error_area);
    }
}

/// Draw the Clear/Send button row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;
    let on_buttons = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Clear",
        on_buttons && form.selected_button == 0,
        true,
    );
    render_button(
        frame,
        chunks[1],
        form.send_label(),
        on_buttons && form.selected_button == 1,
        form.is_send_enabled(),
    );
}
