//! Overlay lifecycle management
//!
//! The `OverlayManager` owns every transient overlay: at most one toast at a
//! time, and a splash screen at most once. All transitions are driven by
//! timer events from the injected scheduler:
//!
//! ```text
//! entering -> visible   settle delay elapsed
//! visible  -> leaving   deadline fired, or manual dismiss
//! leaving  -> removed   teardown delay elapsed
//! any      -> removed   superseded by a newer toast (forced detach)
//! ```
//!
//! Timer events can arrive for an overlay that has already been replaced
//! or has moved on; handlers check the id and state and drop such events.

use std::time::Duration;
use tracing::{debug, trace, warn};

use super::surface::Surface;
use super::types::{
    Overlay, OverlayContent, OverlayId, OverlayState, OverlayStyle, OverlayTimings, OverlayView,
    Severity,
};
use crate::logic::transition::{Easing, Transition};
use crate::scheduler::{Scheduler, Tick, TimerHandle};

/// Timer events the manager schedules for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTimer {
    ToastSettle(OverlayId),
    ToastDeadline(OverlayId),
    ToastTeardown(OverlayId),
    SplashFill(OverlayId),
    SplashFade(OverlayId),
    SplashRemove(OverlayId),
}

#[derive(Debug)]
struct ToastSlot {
    overlay: Overlay,
    style: OverlayStyle,
    settle: Option<TimerHandle>,
    deadline: Option<TimerHandle>,
    teardown: Option<TimerHandle>,
}

impl ToastSlot {
    fn pending_timers(&mut self) -> impl Iterator<Item = TimerHandle> {
        [self.settle.take(), self.deadline.take(), self.teardown.take()]
            .into_iter()
            .flatten()
    }
}

#[derive(Debug)]
struct SplashSlot {
    overlay: Overlay,
    style: OverlayStyle,
    fill: Option<TimerHandle>,
}

/// Creates, shows and tears down toast and splash overlays
#[derive(Debug)]
pub struct OverlayManager<S, D> {
    scheduler: S,
    surface: D,
    timings: OverlayTimings,
    next_id: u64,
    toast: Option<ToastSlot>,
    /// Kept after removal so the splash can never be shown again
    splash: Option<SplashSlot>,
}

impl<S: Scheduler<OverlayTimer>, D: Surface> OverlayManager<S, D> {
    pub fn new(scheduler: S, surface: D, timings: OverlayTimings) -> Self {
        Self {
            scheduler,
            surface,
            timings,
            next_id: 1,
            toast: None,
            splash: None,
        }
    }

    fn allocate_id(&mut self) -> OverlayId {
        let id = OverlayId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Show a toast, replacing any toast already on screen
    ///
    /// The previous toast is detached immediately, even mid-animation. The
    /// new one slides in after the settle delay and starts leaving on its
    /// own once the display deadline passes. The returned id is what
    /// `dismiss_toast` takes.
    pub fn show_toast(&mut self, message: impl Into<String>, severity: Severity) -> OverlayId {
        self.force_remove_toast();

        let id = self.allocate_id();
        let overlay = Overlay::new(
            id,
            OverlayContent::Toast {
                message: message.into(),
                severity,
            },
        );
        let style = OverlayStyle::toast_offscreen();

        self.surface.attach(OverlayView {
            id,
            content: overlay.content().clone(),
            style,
        });

        let settle = self
            .scheduler
            .schedule(self.timings.toast_settle(), OverlayTimer::ToastSettle(id));
        let deadline = self
            .scheduler
            .schedule(self.timings.toast_display(), OverlayTimer::ToastDeadline(id));

        debug!(id = id.raw(), ?severity, "toast attached");

        self.toast = Some(ToastSlot {
            overlay,
            style,
            settle: Some(settle),
            deadline: Some(deadline),
            teardown: None,
        });
        id
    }

    /// Close button: start leaving now instead of at the deadline
    ///
    /// Returns false when `id` is not the current toast or it is already
    /// leaving.
    pub fn dismiss_toast(&mut self, id: OverlayId) -> bool {
        let Some(slot) = self.toast.as_mut().filter(|slot| slot.overlay.id() == id) else {
            return false;
        };
        if slot.overlay.state() >= OverlayState::Leaving {
            return false;
        }

        if let Some(handle) = slot.settle.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = slot.deadline.take() {
            self.scheduler.cancel(handle);
        }

        debug!(id = id.raw(), "toast dismissed");
        self.begin_toast_teardown();
        true
    }

    /// Dismiss whatever toast is current
    pub fn dismiss_current_toast(&mut self) -> bool {
        match self.toast.as_ref().map(|slot| slot.overlay.id()) {
            Some(id) => self.dismiss_toast(id),
            None => false,
        }
    }

    /// Show the loading splash. Only the first call does anything.
    pub fn show_splash_screen(&mut self, title: impl Into<String>) -> Option<OverlayId> {
        if self.splash.is_some() {
            debug!("splash already shown; ignoring");
            return None;
        }

        let id = self.allocate_id();
        let overlay = Overlay::new(
            id,
            OverlayContent::Splash {
                title: title.into(),
            },
        );
        let style = OverlayStyle::splash();

        self.surface.attach(OverlayView {
            id,
            content: overlay.content().clone(),
            style,
        });

        let fill = self
            .scheduler
            .schedule(self.timings.splash_fill_delay(), OverlayTimer::SplashFill(id));
        self.scheduler
            .schedule(self.timings.splash_display(), OverlayTimer::SplashFade(id));

        debug!(id = id.raw(), "splash attached");
        self.splash = Some(SplashSlot {
            overlay,
            style,
            fill: Some(fill),
        });
        Some(id)
    }

    /// The toast currently owned, in any state before removal
    pub fn current_toast(&self) -> Option<&Overlay> {
        self.toast.as_ref().map(|slot| &slot.overlay)
    }

    /// The splash, if it was ever shown (including after removal)
    pub fn splash(&self) -> Option<&Overlay> {
        self.splash.as_ref().map(|slot| &slot.overlay)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Whether anything is attached and may still be animating
    pub fn is_active(&self) -> bool {
        self.toast.is_some()
            || self
                .splash
                .as_ref()
                .is_some_and(|slot| slot.overlay.state() < OverlayState::Removed)
    }

    fn force_remove_toast(&mut self) {
        let Some(mut slot) = self.toast.take() else {
            return;
        };

        for handle in slot.pending_timers() {
            self.scheduler.cancel(handle);
        }

        let id = slot.overlay.id();
        if !self.surface.detach(id) {
            warn!(id = id.raw(), "superseded toast was not attached");
        }
        slot.overlay.advance(OverlayState::Removed);
        debug!(id = id.raw(), "toast superseded");
    }

    fn begin_toast_teardown(&mut self) {
        let now = self.scheduler.now();
        let Some(slot) = self.toast.as_mut() else {
            return;
        };
        if !slot.overlay.advance(OverlayState::Leaving) {
            return;
        }

        let id = slot.overlay.id();
        slot.style.slide =
            slot.style
                .slide
                .retarget(1.0, now, self.timings.toast_slide(), Easing::EaseInOut);
        self.surface.set_style(id, slot.style);
        slot.teardown = Some(
            self.scheduler
                .schedule(self.timings.toast_teardown(), OverlayTimer::ToastTeardown(id)),
        );
        debug!(id = id.raw(), "toast leaving");
    }

    fn handle_timer(&mut self, timer: OverlayTimer) {
        match timer {
            OverlayTimer::ToastSettle(id) => self.on_toast_settle(id),
            OverlayTimer::ToastDeadline(id) => self.on_toast_deadline(id),
            OverlayTimer::ToastTeardown(id) => self.on_toast_teardown(id),
            OverlayTimer::SplashFill(id) => self.on_splash_fill(id),
            OverlayTimer::SplashFade(id) => self.on_splash_fade(id),
            OverlayTimer::SplashRemove(id) => self.on_splash_remove(id),
        }
    }

    fn on_toast_settle(&mut self, id: OverlayId) {
        let now = self.scheduler.now();
        let Some(slot) = self.toast.as_mut().filter(|slot| slot.overlay.id() == id) else {
            trace!(id = id.raw(), "settle for stale toast");
            return;
        };
        slot.settle = None;
        if !slot.overlay.advance(OverlayState::Visible) {
            trace!(id = id.raw(), "settle after toast started leaving");
            return;
        }

        slot.style.slide =
            slot.style
                .slide
                .retarget(0.0, now, self.timings.toast_slide(), Easing::EaseInOut);
        self.surface.set_style(id, slot.style);
        debug!(id = id.raw(), "toast visible");
    }

    fn on_toast_deadline(&mut self, id: OverlayId) {
        let Some(slot) = self.toast.as_mut().filter(|slot| slot.overlay.id() == id) else {
            trace!(id = id.raw(), "deadline for stale toast");
            return;
        };
        slot.deadline = None;
        debug!(id = id.raw(), "toast deadline reached");
        self.begin_toast_teardown();
    }

    fn on_toast_teardown(&mut self, id: OverlayId) {
        let mut slot = match self.toast.take() {
            Some(slot) if slot.overlay.id() == id => slot,
            other => {
                self.toast = other;
                trace!(id = id.raw(), "teardown for stale toast");
                return;
            }
        };

        slot.teardown = None;
        // Settle can still be pending when teardown is shorter than it
        for handle in slot.pending_timers() {
            self.scheduler.cancel(handle);
        }
        if !self.surface.detach(id) {
            warn!(id = id.raw(), "toast was already detached");
        }
        slot.overlay.advance(OverlayState::Removed);
        debug!(id = id.raw(), "toast removed");
    }

    fn on_splash_fill(&mut self, id: OverlayId) {
        let now = self.scheduler.now();
        let Some(slot) = self.splash.as_mut().filter(|slot| slot.overlay.id() == id) else {
            return;
        };
        slot.fill = None;
        if !slot.overlay.advance(OverlayState::Visible) {
            trace!(id = id.raw(), "splash fill after fade began");
            return;
        }

        slot.style.progress = Transition::new(
            0.0,
            1.0,
            now,
            self.timings.splash_fill(),
            Easing::EaseInOut,
        );
        self.surface.set_style(id, slot.style);
    }

    fn on_splash_fade(&mut self, id: OverlayId) {
        let now = self.scheduler.now();
        let Some(slot) = self.splash.as_mut().filter(|slot| slot.overlay.id() == id) else {
            return;
        };
        if !slot.overlay.advance(OverlayState::Leaving) {
            return;
        }

        slot.style.opacity =
            slot.style
                .opacity
                .retarget(0.0, now, self.timings.splash_fade(), Easing::EaseInOut);
        self.surface.set_style(id, slot.style);
        self.scheduler
            .schedule(self.timings.splash_fade(), OverlayTimer::SplashRemove(id));
        debug!(id = id.raw(), "splash fading");
    }

    fn on_splash_remove(&mut self, id: OverlayId) {
        let Some(slot) = self.splash.as_mut().filter(|slot| slot.overlay.id() == id) else {
            return;
        };
        if !slot.overlay.advance(OverlayState::Removed) {
            return;
        }
        if let Some(handle) = slot.fill.take() {
            self.scheduler.cancel(handle);
        }
        if !self.surface.detach(id) {
            warn!(id = id.raw(), "splash was already detached");
        }
        debug!(id = id.raw(), "splash removed");
    }
}

impl<S: Scheduler<OverlayTimer>, D: Surface> Tick for OverlayManager<S, D> {
    fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn tick(&mut self) {
        while let Some(timer) = self.scheduler.pop_due() {
            self.handle_timer(timer);
        }
    }
}
