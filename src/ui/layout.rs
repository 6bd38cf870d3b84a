//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{SubmitStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 18;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the section sidebar with the active section highlighted
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    // Owner name at the top
    let name_line = Line::from(Span::styled(
        format!(" {} ", app.state.content.owner),
        Style::default().fg(Color::Cyan),
    ));
    let name_area = Rect {
        height: 1.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(name_line), name_area);

    let mut y = area.y + 2;
    for (index, section) in View::SECTIONS.iter().enumerate() {
        if y + BUTTON_HEIGHT > area.y + area.height {
            break;
        }
        let button_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: BUTTON_HEIGHT,
        };
        let is_active = app.state.current_view == *section;
        render_sidebar_button(
            frame,
            button_area,
            &format!("{}", index + 1),
            section.title(),
            is_active,
            true,
        );
        y += BUTTON_HEIGHT;
    }
}

/// Draw the status bar with contextual hints
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = match app.state.current_view {
        View::Splash => "",
        View::Home => " 1/2/3 sections · Tab next · j/k scroll · q quit",
        View::Projects => " j/k select · r replay intro · Tab next section · q quit",
        View::Contact => " Tab next field · Enter send · Ctrl+Y copy address · Esc back",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if app.state.contact_form.status == SubmitStatus::Submitting {
        spans.push(Span::styled(
            "  Sending...",
            Style::default().fg(Color::Yellow),
        ));
    }
    if app.state.notifications.is_active() {
        spans.push(Span::styled(
            "  Del closes notice",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
