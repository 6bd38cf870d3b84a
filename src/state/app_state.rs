//! Application state definitions

use crate::config::PortfolioConfig;
use crate::state::{ContactForm, NotificationCenter, RevealState};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with banner animation
    Splash,
    #[default]
    Home,
    Projects,
    Contact,
}

impl View {
    /// Sections reachable from the sidebar, in display order
    pub const SECTIONS: [View; 3] = [View::Home, View::Projects, View::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            View::Splash => "",
            View::Home => "Home",
            View::Projects => "Projects",
            View::Contact => "Contact",
        }
    }
}

/// Aggregated application state
#[derive(Debug)]
pub struct AppState {
    /// Which section is on screen (and highlighted in the sidebar)
    pub current_view: View,
    /// Portfolio content loaded from configuration
    pub content: PortfolioConfig,
    /// The contact form and its submission status
    pub contact_form: ContactForm,
    /// Transient toast notifications
    pub notifications: NotificationCenter,
    /// Entrance animation for the projects section, when one is running
    pub reveal: Option<RevealState>,
    /// Selected card in the projects section
    pub selected_project: usize,
    /// Scroll offset in the home section
    pub home_scroll: u16,
}

impl AppState {
    pub fn new(content: PortfolioConfig) -> Self {
        Self {
            current_view: View::Splash,
            content,
            contact_form: ContactForm::new(),
            notifications: NotificationCenter::new(),
            reveal: None,
            selected_project: 0,
            home_scroll: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PortfolioConfig::default())
    }
}
