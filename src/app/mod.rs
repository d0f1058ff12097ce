//! App Orchestration
//!
//! `App` ties the pieces together:
//! - Model state (pure, in src/model/)
//! - The overlay manager and its surface (src/overlay/)
//! - Page timers on a second queue sharing the same clock
//! - Logic (pure functions in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain in
//! the submodules.

pub(crate) mod form;
pub(crate) mod navigation;
pub(crate) mod page;

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::content::SiteContent;
use crate::logic::document::Document;
use crate::logic::typing::TYPING_START_DELAY;
use crate::model::Model;
use crate::overlay::{Display, OverlayManager, OverlayState, OverlayTimer, Severity};
use crate::scheduler::{Clock, Scheduler, SystemClock, Tick, TimerQueue};

pub use form::{FORM_SEND_DELAY, SENT_MESSAGE};
pub use page::PageTimer;

/// Redraw interval while something is animating
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Longest the loop sleeps when nothing is scheduled
pub const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Message of the help toast
pub const HELP_MESSAGE: &str =
    "j/k scroll, 1-6 sections, Tab next section, m menu, f contact form, x close toast, q quit";

pub type Overlays<C> = OverlayManager<TimerQueue<OverlayTimer, C>, Display>;

pub struct App<C: Clock = SystemClock> {
    pub model: Model,
    pub content: SiteContent,
    /// Page laid out for the current viewport width
    pub document: Document,
    pub overlays: Overlays<C>,
    timers: TimerQueue<PageTimer, C>,
    clock: C,
}

impl<C: Clock + Clone> App<C> {
    pub fn new(config: &Config, clock: C) -> Self {
        let model = Model::new(config.vim_mode);
        let document = Document::build(&config.site, model.ui.viewport.width);
        let overlays = OverlayManager::new(
            TimerQueue::new(clock.clone()),
            Display::new(),
            config.overlay,
        );

        let mut app = Self {
            model,
            content: config.site.clone(),
            document,
            overlays,
            timers: TimerQueue::new(clock.clone()),
            clock,
        };

        app.refresh_clock();
        app.timers.schedule(page::CLOCK_INTERVAL, PageTimer::ClockTick);
        app.timers.schedule(TYPING_START_DELAY, PageTimer::TypeNext);

        if config.splash {
            let title = app.content.name.clone();
            app.overlays.show_splash_screen(title);
        }

        app.observe_viewport();
        info!(
            rows = app.document.height(),
            sections = app.document.sections.len(),
            "page ready"
        );
        app
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Page timers still waiting to fire
    pub fn pending_page_timers(&self) -> usize {
        self.timers.pending()
    }

    /// React to a terminal resize: re-lay out the page for the new width
    pub fn resize(&mut self, width: u16, height: u16) {
        let old_width = self.model.ui.viewport.width;
        self.model.ui.resize(width, height);

        if self.model.ui.viewport.width != old_width {
            self.document = Document::build(&self.content, self.model.ui.viewport.width);
            debug!(width, height, rows = self.document.height(), "page re-laid out");
        }

        let max = self.max_scroll();
        if self.model.page.scroll.target() > max {
            self.model.page.scroll.jump(max);
        }
        self.observe_viewport();
    }

    /// Whether the splash still covers the page
    pub fn splash_active(&self) -> bool {
        self.overlays
            .splash()
            .is_some_and(|splash| splash.state() < OverlayState::Removed)
    }

    pub fn show_help(&mut self) {
        self.overlays.show_toast(HELP_MESSAGE, Severity::Info);
    }

    pub fn dismiss_toast(&mut self) -> bool {
        self.overlays.dismiss_current_toast()
    }

    pub fn quit(&mut self) {
        debug!("quit requested");
        self.model.ui.should_quit = true;
    }

    /// Whether anything on screen is moving right now
    pub fn is_animating(&self) -> bool {
        self.overlays.is_active() || self.model.page.is_animating(self.now())
    }

    /// How long the main loop may sleep before the next redraw
    pub fn wake_in(&self) -> Duration {
        if self.is_animating() {
            return FRAME_INTERVAL;
        }
        let now = self.now();
        Tick::next_deadline(self)
            .map(|deadline| deadline.saturating_sub(now))
            .unwrap_or(IDLE_INTERVAL)
            .min(IDLE_INTERVAL)
    }
}

impl<C: Clock + Clone> Tick for App<C> {
    fn next_deadline(&self) -> Option<Duration> {
        match (self.overlays.next_deadline(), self.timers.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn tick(&mut self) {
        self.overlays.tick();
        while let Some(timer) = self.timers.pop_due() {
            self.handle_page_timer(timer);
        }
        // Page timers can show toasts whose timers are already due
        self.overlays.tick();

        let now = self.now();
        self.model.page.scroll.settle(now);
        self.observe_viewport();
    }
}
