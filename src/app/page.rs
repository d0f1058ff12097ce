//! Page animation orchestration
//!
//! Timer-driven page rules:
//! - Live clock refresh
//! - Typing headline
//! - Hero counters and domain progress bars, armed on first sight
//! - Scroll reveal of feature, timeline and card blocks

use std::time::Duration;

use chrono::Local;
use tracing::{debug, trace};

use super::App;
use crate::logic::counter::{BAR_FILL_DELAY, COUNTER_START_DELAY};
use crate::logic::document::SectionId;
use crate::logic::formatting::{format_clock_date, format_clock_time};
use crate::logic::reveal::{intersection_ratio, should_reveal, HALF_VISIBLE};
use crate::logic::typing::{CURSOR_LINGER, TYPING_SPEED};
use crate::model::page::ClockText;
use crate::overlay::Severity;
use crate::scheduler::{Clock, Scheduler};

pub(crate) const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);

/// Timer events of the page itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTimer {
    ClockTick,
    TypeNext,
    HideCursor,
    StartCounters,
    FillBar(usize),
    FormSent,
}

impl<C: Clock + Clone> App<C> {
    pub(crate) fn handle_page_timer(&mut self, timer: PageTimer) {
        let now = self.now();
        match timer {
            PageTimer::ClockTick => {
                self.refresh_clock();
                self.timers.schedule(CLOCK_INTERVAL, PageTimer::ClockTick);
            }
            PageTimer::TypeNext => self.type_next(),
            PageTimer::HideCursor => {
                self.model.page.typing.cursor_visible = false;
                debug!("typing cursor hidden");
            }
            PageTimer::StartCounters => {
                self.model.page.counters.started_at = Some(now);
                debug!("counters started");
            }
            PageTimer::FillBar(index) => {
                let Some(percent) = self.content.domains.get(index).map(|domain| domain.progress)
                else {
                    trace!(index, "fill for unknown progress bar");
                    return;
                };
                self.model.page.fill_bar(index, percent, now);
                debug!(index, percent, "progress bar filling");
            }
            PageTimer::FormSent => {
                self.model.form.reset();
                self.overlays
                    .show_toast(super::form::SENT_MESSAGE, Severity::Success);
                debug!("contact form sent");
            }
        }
    }

    pub(crate) fn refresh_clock(&mut self) {
        let now = Local::now().naive_local();
        self.model.page.clock = ClockText {
            time: format_clock_time(&now),
            date: format_clock_date(&now),
        };
    }

    fn type_next(&mut self) {
        let total = self.content.name.chars().count();
        let typing = &mut self.model.page.typing;

        if typing.typed < total {
            typing.typed += 1;
            self.timers.schedule(TYPING_SPEED, PageTimer::TypeNext);
        } else {
            self.timers.schedule(CURSOR_LINGER, PageTimer::HideCursor);
        }
    }

    /// Scroll position the viewport shows right now
    pub fn scroll_position(&self) -> usize {
        self.model.page.scroll.current(self.now())
    }

    /// Check every one-shot page trigger against what is on screen
    pub fn observe_viewport(&mut self) {
        let now = self.now();
        let scroll = self.scroll_position();
        let view_height = self.model.ui.viewport.height;

        if !self.model.page.counters.scheduled {
            if let Some(hero) = self.document.section(SectionId::Home) {
                if intersection_ratio(hero.top, hero.height, scroll, view_height) >= HALF_VISIBLE {
                    self.model.page.counters.scheduled = true;
                    self.timers.schedule(COUNTER_START_DELAY, PageTimer::StartCounters);
                    debug!("counters armed");
                }
            }
        }

        for (index, &row) in self.document.progress_rows.iter().enumerate() {
            if self.model.page.bars_scheduled.contains(&index) {
                continue;
            }
            if intersection_ratio(row, 1, scroll, view_height) >= HALF_VISIBLE {
                self.model.page.bars_scheduled.insert(index);
                self.timers.schedule(BAR_FILL_DELAY, PageTimer::FillBar(index));
                debug!(index, "progress bar armed");
            }
        }

        for (index, block) in self.document.blocks.iter().enumerate() {
            if self.model.page.revealed.contains_key(&index) {
                continue;
            }
            if should_reveal(block.top, block.height, scroll, view_height) {
                self.model.page.revealed.insert(index, now);
                trace!(index, effect = ?block.effect, "block revealed");
            }
        }
    }
}
