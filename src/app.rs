use std::time::Instant;

use crossterm::event::KeyEvent;
use log::{debug, info};

use crate::{
    config::RuntimeSettings,
    input::{intent_for, Intent},
    language::{Language, WordSourceError},
    session::Session,
    timer::Countdown,
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Typing,
    Results,
    Analytics,
}

/// Tabs of the analytics overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum AnalyticsTab {
    Correct,
    Wrong,
}

impl AnalyticsTab {
    pub const ALL: [AnalyticsTab; 2] = [AnalyticsTab::Correct, AnalyticsTab::Wrong];

    pub fn index(&self) -> usize {
        match self {
            AnalyticsTab::Correct => 0,
            AnalyticsTab::Wrong => 1,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AnalyticsTab::Correct => AnalyticsTab::Wrong,
            AnalyticsTab::Wrong => AnalyticsTab::Correct,
        }
    }

    // two tabs, so previous and next coincide
    pub fn previous(&self) -> Self {
        self.next()
    }
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub settings: RuntimeSettings,
    pub language: Language,
    pub session: Session,
    /// Present exactly while the session is active
    pub countdown: Option<Countdown>,
    pub state: AppState,
    pub analytics_tab: AnalyticsTab,
}

impl App {
    pub fn new(settings: RuntimeSettings) -> Result<Self, WordSourceError> {
        let language = match settings.custom_words {
            Some(ref text) => Language::custom(text)?,
            None => settings.language.as_lang()?,
        };

        Ok(Self::with_language(settings, language))
    }

    pub fn with_language(settings: RuntimeSettings, language: Language) -> Self {
        let session = Session::new(&language.words, settings.duration_secs);
        info!(
            "new game: {} words from '{}', {}s",
            language.len(),
            language.name,
            settings.duration_secs
        );

        Self {
            settings,
            language,
            session,
            countdown: None,
            state: AppState::Typing,
            analytics_tab: AnalyticsTab::Correct,
        }
    }

    /// Start a new round with a fresh shuffle; the running countdown is dropped
    pub fn restart(&mut self) {
        self.countdown = None;
        self.session.restart();
        self.state = AppState::Typing;
        self.analytics_tab = AnalyticsTab::Correct;
    }

    /// Seconds that ended before `now` are credited first, so the key is
    /// judged against the round as it stands at the moment it arrived.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        self.advance_clock(now);

        match intent_for(&self.state, key, self.session.typed_buffer()) {
            Some(intent) => self.apply(intent, now),
            None => Flow::Continue,
        }
    }

    pub fn apply(&mut self, intent: Intent, now: Instant) -> Flow {
        debug!("intent {intent:?} in {:?}", self.state);

        match intent {
            Intent::TextChange(text) => self.session.on_text_change(text),
            Intent::Commit => {
                self.session.on_commit_word();
            }
            Intent::Restart => self.restart(),
            Intent::OpenAnalytics => self.state = AppState::Analytics,
            Intent::CloseAnalytics => self.state = AppState::Results,
            Intent::NextTab => self.analytics_tab = self.analytics_tab.next(),
            Intent::PreviousTab => self.analytics_tab = self.analytics_tab.previous(),
            Intent::SelectTab(tab) => self.analytics_tab = tab,
            Intent::Quit => {
                self.countdown = None;
                return Flow::Quit;
            }
        }

        self.sync(now);
        Flow::Continue
    }

    /// Feed elapsed whole seconds into the session
    pub fn advance_clock(&mut self, now: Instant) {
        if let Some(countdown) = self.countdown.as_mut() {
            for _ in 0..countdown.poll(now) {
                self.session.on_timer_tick();
                if self.session.has_finished() {
                    break;
                }
            }
        }

        self.sync(now);
    }

    /// Keep the countdown and the visible view in step with the session phase
    fn sync(&mut self, now: Instant) {
        if self.session.has_started() && !self.session.has_finished() {
            if self.countdown.is_none() {
                self.countdown = Some(Countdown::start(now));
            }
        } else {
            self.countdown = None;
        }

        if self.session.has_finished() && self.state == AppState::Typing {
            self.state = AppState::Results;
        }
    }
}
