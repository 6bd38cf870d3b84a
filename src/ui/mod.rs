//! UI module for rendering the TUI

mod components;
mod contact;
mod home;
mod layout;
mod projects;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    // Splash takes over the whole screen
    if matches!(app.state.current_view, View::Splash) {
        if let Some(ref splash) = app.splash_state {
            splash::draw(frame, area, splash, &app.state.content);
        }
        return;
    }

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Splash => {}
        View::Home => home::draw(frame, main_area, app),
        View::Projects => projects::draw(frame, main_area, app, now),
        View::Contact => contact::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toasts overlay everything else
    components::draw_toasts(frame, area, &app.state.notifications, now);
}
