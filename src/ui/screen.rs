use ratatui::Frame;

use crate::{app::AppState, ui::analytics::render_analytics, App};

/// A UI Screen boundary: responsible for rendering one view of the app
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Typing screen - current word, input line, clock
pub struct TypingScreen;

impl Screen for TypingScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Results screen - score and per-word breakdown
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Analytics overlay drawn over the results
pub struct AnalyticsScreen;

impl Screen for AnalyticsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let area = f.area();
        ResultsScreen.render(app, f);
        render_analytics(app, area, f.buffer_mut());
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Typing => Box::new(TypingScreen),
        AppState::Results => Box::new(ResultsScreen),
        AppState::Analytics => Box::new(AnalyticsScreen),
    }
}
