//! Page Model
//!
//! State of the page's one-shot and periodic animations: scroll position,
//! typed headline, counters, progress bars, revealed blocks and the clock.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::logic::counter::{counter_value, BAR_FILL_DURATION, COUNTER_DURATION};
use crate::logic::reveal::REVEAL_DURATION;
use crate::logic::transition::{Easing, Transition};

/// Scroll position with an optional smooth-scroll animation
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    /// Final position (where the animation ends)
    position: usize,
    animation: Option<Transition>,
}

impl ScrollState {
    /// Row at the top of the viewport at `now`
    pub fn current(&self, now: Duration) -> usize {
        match &self.animation {
            Some(animation) => animation.value_at(now).round().max(0.0) as usize,
            None => self.position,
        }
    }

    pub fn target(&self) -> usize {
        self.position
    }

    /// Move immediately, cancelling any animation
    pub fn jump(&mut self, to: usize) {
        self.position = to;
        self.animation = None;
    }

    /// Animate from the current position to `to`
    pub fn animate_to(&mut self, to: usize, now: Duration, duration: Duration) {
        let from = self.current(now);
        self.position = to;
        self.animation = (from != to)
            .then(|| Transition::new(from as f32, to as f32, now, duration, Easing::EaseInOut));
    }

    /// Drop a finished animation
    pub fn settle(&mut self, now: Duration) {
        if self.animation.is_some_and(|animation| animation.is_finished(now)) {
            self.animation = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// Typing headline progress
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingState {
    /// Characters typed so far
    pub typed: usize,
    pub cursor_visible: bool,
}

impl Default for TypingState {
    fn default() -> Self {
        Self {
            typed: 0,
            cursor_visible: true,
        }
    }
}

/// Hero counters: armed once, then started once
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub scheduled: bool,
    pub started_at: Option<Duration>,
}

/// Formatted navbar clock
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockText {
    pub time: String,
    pub date: String,
}

#[derive(Clone, Debug, Default)]
pub struct PageModel {
    pub scroll: ScrollState,
    pub typing: TypingState,
    pub counters: CounterState,
    /// Progress bars whose fill has been scheduled
    pub bars_scheduled: HashSet<usize>,
    /// Fill animation of each started progress bar
    pub bars: HashMap<usize, Transition>,
    /// Reveal start time of each revealed block
    pub revealed: HashMap<usize, Duration>,
    pub clock: ClockText,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value for `target`
    pub fn counter(&self, target: u32, now: Duration) -> u32 {
        match self.counters.started_at {
            Some(started) => counter_value(target, now.saturating_sub(started)),
            None => 0,
        }
    }

    /// Start filling progress bar `index` towards `percent`
    pub fn fill_bar(&mut self, index: usize, percent: u8, now: Duration) {
        let target = f32::from(percent.min(100)) / 100.0;
        self.bars.insert(
            index,
            Transition::new(0.0, target, now, BAR_FILL_DURATION, Easing::EaseInOut),
        );
    }

    /// Current fill of progress bar `index` in [0, 1]
    pub fn bar_fraction(&self, index: usize, now: Duration) -> f32 {
        self.bars
            .get(&index)
            .map(|fill| fill.value_at(now))
            .unwrap_or(0.0)
    }

    /// Entrance progress of a block, or None while it is still hidden
    pub fn reveal_progress(&self, block: usize, now: Duration) -> Option<f32> {
        self.revealed.get(&block).map(|&started| {
            Transition::new(0.0, 1.0, started, REVEAL_DURATION, Easing::Linear).value_at(now)
        })
    }

    /// Whether anything on the page is mid-animation at `now`
    pub fn is_animating(&self, now: Duration) -> bool {
        let counters_running = self
            .counters
            .started_at
            .is_some_and(|started| now.saturating_sub(started) < COUNTER_DURATION);
        self.scroll.is_animating()
            || counters_running
            || self.bars.values().any(|fill| !fill.is_finished(now))
            || self
                .revealed
                .values()
                .any(|&started| now.saturating_sub(started) < REVEAL_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_scroll_jump_cancels_animation() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(40, ms(0), ms(400));
        assert!(scroll.is_animating());

        scroll.jump(3);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.current(ms(100)), 3);
    }

    #[test]
    fn test_smooth_scroll_lands_on_target() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(40, ms(0), ms(400));
        assert_eq!(scroll.current(ms(0)), 0);
        let midway = scroll.current(ms(200));
        assert!(midway > 0 && midway < 40);
        assert_eq!(scroll.current(ms(400)), 40);

        scroll.settle(ms(400));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.current(ms(400)), 40);
    }

    #[test]
    fn test_animate_to_same_position_is_instant() {
        let mut scroll = ScrollState::default();
        scroll.animate_to(0, ms(0), ms(400));
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_counter_before_start_is_zero() {
        let page = PageModel::new();
        assert_eq!(page.counter(250, ms(10_000)), 0);
    }

    #[test]
    fn test_bar_fill() {
        let mut page = PageModel::new();
        assert_eq!(page.bar_fraction(0, ms(0)), 0.0);

        page.fill_bar(0, 75, ms(100));
        assert_eq!(page.bar_fraction(0, ms(100)), 0.0);
        assert!((page.bar_fraction(0, ms(100) + BAR_FILL_DURATION) - 0.75).abs() < 1e-6);
        assert!(page.is_animating(ms(200)));
        assert!(!page.is_animating(ms(100) + BAR_FILL_DURATION));
    }

    #[test]
    fn test_reveal_progress() {
        let mut page = PageModel::new();
        assert_eq!(page.reveal_progress(2, ms(0)), None);

        page.revealed.insert(2, ms(1000));
        assert_eq!(page.reveal_progress(2, ms(1000)), Some(0.0));
        assert_eq!(page.reveal_progress(2, ms(1000) + REVEAL_DURATION), Some(1.0));
    }
}
