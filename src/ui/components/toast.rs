//! Toast notification widget
//!
//! Renders the live toast in the top-right corner, sliding in from the
//! right edge while entering and back out while leaving.

use crate::state::{NotificationCenter, Severity, ToastPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Widest a toast box is allowed to grow
const MAX_TOAST_WIDTH: u16 = 50;

/// Draw every live toast as an overlay
pub fn draw_toasts(frame: &mut Frame, area: Rect, center: &NotificationCenter, now: Instant) {
    let mut y = area.y + 1;

    for toast in center.iter() {
        if toast.phase == ToastPhase::Removed {
            continue;
        }

        let max_width = area.width.saturating_sub(4).min(MAX_TOAST_WIDTH);
        if max_width < 8 {
            return;
        }

        let wrapped = wrap_text(&toast.message, (max_width - 4) as usize);
        let height = wrapped.len() as u16 + 2;
        if y + height > area.y + area.height {
            return;
        }

        // Horizontal slide driven by the phase progress
        let eased = simple_easing::cubic_out(toast.phase_progress(now));
        let slide = match toast.phase {
            ToastPhase::Entering => 1.0 - eased,
            ToastPhase::Leaving => eased,
            ToastPhase::Visible | ToastPhase::Removed => 0.0,
        };
        let offset = (slide * max_width as f32) as u16;
        if offset >= max_width.saturating_sub(2) {
            y += height + 1;
            continue;
        }
        let visible_width = max_width - offset;

        // Right edge stays anchored; the left edge advances as the toast
        // slides out
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(max_width + 2) + offset,
            y,
            width: visible_width,
            height,
        };

        let (title, accent) = match toast.severity {
            Severity::Success => (" Success ", Color::Green),
            Severity::Error => (" Error ", Color::Red),
        };

        let lines: Vec<Line> = wrapped.into_iter().map(Line::from).collect();
        let block = Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        frame.render_widget(Clear, toast_area);
        frame.render_widget(Paragraph::new(lines).block(block), toast_area);

        y += height + 1;
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short_line_is_unchanged() {
        let lines = wrap_text("hello world", 40);
        assert_eq!(lines, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_wrap_text_breaks_long_lines() {
        let lines = wrap_text("one two three four", 9);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 9));
    }

    #[test]
    fn test_wrap_text_empty_input() {
        let lines = wrap_text("", 10);
        assert_eq!(lines, vec![String::new()]);
    }
}
