//! Integration tests for the overlay manager lifecycle
//!
//! These tests drive the manager through its public API with a manual
//! clock and check the guarantees callers rely on:
//! 1. At most one toast is ever attached
//! 2. Every toast is detached exactly once and no timers leak
//! 3. Manual dismiss starts leaving immediately and never runs twice
//! 4. The splash happens once and ends removed

use std::collections::HashMap;
use std::time::Duration;

use itsatui::overlay::{
    OverlayId, OverlayManager, OverlayState, OverlayStyle, OverlayTimer, OverlayTimings,
    OverlayView, Severity, Surface,
};
use itsatui::overlay::Display;
use itsatui::scheduler::{advance, ManualClock, TimerQueue};

/// Display that counts detaches and tracks the most toasts ever attached
#[derive(Default)]
struct AuditSurface {
    display: Display,
    detaches: HashMap<OverlayId, usize>,
    max_toasts: usize,
}

impl Surface for AuditSurface {
    fn attach(&mut self, view: OverlayView) {
        self.display.attach(view);
        self.max_toasts = self.max_toasts.max(self.display.toasts().count());
    }

    fn detach(&mut self, id: OverlayId) -> bool {
        let detached = self.display.detach(id);
        if detached {
            *self.detaches.entry(id).or_default() += 1;
        }
        detached
    }

    fn set_style(&mut self, id: OverlayId, style: OverlayStyle) -> bool {
        self.display.set_style(id, style)
    }

    fn is_attached(&self, id: OverlayId) -> bool {
        self.display.is_attached(id)
    }
}

type Manager = OverlayManager<TimerQueue<OverlayTimer, ManualClock>, AuditSurface>;

fn manager() -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    let manager = OverlayManager::new(
        TimerQueue::new(clock.clone()),
        AuditSurface::default(),
        OverlayTimings::default(),
    );
    (manager, clock)
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Long enough for any toast to finish on its own
fn settle_all(manager: &mut Manager, clock: &ManualClock) {
    advance(manager, clock, ms(10_000));
}

/// Test: Two toasts back to back leave only the second on screen
#[test]
fn test_second_toast_replaces_first() {
    let (mut manager, clock) = manager();
    let first = manager.show_toast("Message sent successfully!", Severity::Success);
    let second = manager.show_toast("Second", Severity::Info);

    assert_eq!(manager.surface().display.toasts().count(), 1);
    assert!(manager.surface().display.contains_message("Second"));
    assert!(!manager.surface().display.contains_message("Message sent successfully!"));

    settle_all(&mut manager, &clock);

    assert!(manager.surface().display.is_empty());
    assert_eq!(manager.surface().detaches.get(&first), Some(&1));
    assert_eq!(manager.surface().detaches.get(&second), Some(&1));
    assert_eq!(manager.surface().max_toasts, 1);
}

/// Test: An untouched toast goes away after its deadline and leaves no timers
#[test]
fn test_toast_times_out_cleanly() {
    let (mut manager, clock) = manager();
    let id = manager.show_toast("Hi", Severity::Info);

    advance(&mut manager, &clock, ms(4_999));
    assert_eq!(manager.current_toast().map(|t| t.state()), Some(OverlayState::Visible));

    // Deadline (5000) + teardown (300)
    advance(&mut manager, &clock, ms(301));
    assert!(manager.current_toast().is_none());
    assert!(!manager.surface().is_attached(id));
    assert_eq!(manager.pending_timers(), 0);
}

/// Test: Dismissing right away starts leaving now and removes after the teardown
#[test]
fn test_immediate_dismiss() {
    let (mut manager, clock) = manager();
    let id = manager.show_toast("Hi", Severity::Info);

    assert!(manager.dismiss_toast(id));
    assert_eq!(manager.current_toast().map(|t| t.state()), Some(OverlayState::Leaving));
    // A second dismiss is a no-op
    assert!(!manager.dismiss_toast(id));

    advance(&mut manager, &clock, ms(299));
    assert!(manager.surface().is_attached(id));

    advance(&mut manager, &clock, ms(1));
    assert!(!manager.surface().is_attached(id));
    assert_eq!(manager.pending_timers(), 0);

    // Nothing fires at the old deadline
    settle_all(&mut manager, &clock);
    assert_eq!(manager.surface().detaches.get(&id), Some(&1));
}

/// Test: Dismissing a visible toast cancels its deadline
#[test]
fn test_dismiss_after_visible_cancels_deadline() {
    let (mut manager, clock) = manager();
    let id = manager.show_toast("Hi", Severity::Info);
    advance(&mut manager, &clock, ms(1_000));

    assert!(manager.dismiss_toast(id));
    assert_eq!(manager.pending_timers(), 1, "only the teardown is left");

    settle_all(&mut manager, &clock);
    assert_eq!(manager.surface().detaches.get(&id), Some(&1));
    assert_eq!(manager.pending_timers(), 0);
}

/// Test: A burst of toasts at every lifecycle phase never shows two at once
#[test]
fn test_toast_burst_never_overlaps() {
    let (mut manager, clock) = manager();
    let mut ids = Vec::new();

    // Gaps land in entering, visible, leaving and after removal
    for (step, gap) in [0u64, 50, 150, 2_000, 5_100, 5_200, 5_400, 20, 300, 7_000]
        .into_iter()
        .enumerate()
    {
        ids.push(manager.show_toast(format!("toast {}", step), Severity::Info));
        if step % 3 == 1 {
            manager.dismiss_current_toast();
        }
        advance(&mut manager, &clock, ms(gap));
        assert!(manager.surface().display.toasts().count() <= 1);
    }

    settle_all(&mut manager, &clock);
    assert_eq!(manager.surface().max_toasts, 1);
    for id in ids {
        assert_eq!(manager.surface().detaches.get(&id), Some(&1), "toast {:?}", id);
    }
    assert_eq!(manager.pending_timers(), 0);
}

/// Test: The splash shows once, fades and is removed
#[test]
fn test_splash_lifecycle() {
    let (mut manager, clock) = manager();
    let id = manager.show_splash_screen("ITSA SJCEM").expect("first splash");
    assert_eq!(manager.show_splash_screen("again"), None);

    advance(&mut manager, &clock, ms(2_000));
    assert_eq!(manager.splash().map(|s| s.state()), Some(OverlayState::Leaving));
    assert!(manager.surface().is_attached(id));

    advance(&mut manager, &clock, ms(500));
    assert_eq!(manager.splash().map(|s| s.state()), Some(OverlayState::Removed));
    assert!(manager.surface().display.is_empty());
    assert_eq!(manager.show_splash_screen("later"), None);
    assert!(!manager.is_active());
}
