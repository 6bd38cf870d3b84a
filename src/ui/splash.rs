//! Splash screen rendering

use crate::config::PortfolioConfig;
use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the banner lines shown during the splash
fn build_banner(content: &PortfolioConfig) -> Vec<Line<'_>> {
    let rule = "─".repeat(content.owner.chars().count() + 6);
    vec![
        Line::from(Span::styled(
            rule.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
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
        Line::from(""),
        Line::from(Span::styled(rule, Style::default().fg(Color::Cyan))),
    ]
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, content: &PortfolioConfig) {
    let lines = build_banner(content);

    let banner_height = lines.len() as u16;
    let banner_width = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0) as u16;

    // Calculate center position with scroll offset (can go above screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(banner_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(banner_width)) / 2;

    // Lines scroll off the top as the offset grows
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let banner_area = Rect {
        x,
        y: render_y,
        width: banner_width.min(area.width),
        height: visible_height.min(area.height),
    };

    frame.render_widget(Paragraph::new(visible_lines), banner_area);

    // Skip hint at the bottom (only while the banner holds still)
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        let hint_area = Rect {
            x: hint_x,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
