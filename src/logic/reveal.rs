//! Viewport intersection and scroll-reveal logic
//!
//! Pure functions answering "how much of this row range is on screen" and
//! "how far along is this element's entrance animation".

use std::time::Duration;

/// Kind of animated element, decides its entrance effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Feature,
    Timeline,
    Card,
}

/// Entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeIn,
    SlideInLeft,
    SlideInRight,
}

/// Fraction of a block that must be on screen before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Rows cut off the bottom of the viewport when testing reveals
pub const REVEAL_BOTTOM_MARGIN: usize = 2;

/// Fraction of the hero / a progress bar that must be on screen to trigger it
pub const HALF_VISIBLE: f32 = 0.5;

/// Length of every entrance animation
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Columns a sliding element travels
pub const SLIDE_DISTANCE: f32 = 8.0;

/// Pick the entrance effect for the `index`-th animated element on the page
///
/// Features and timeline items fade in; everything else alternates
/// left/right by its position among all animated elements.
///
/// # Examples
/// ```
/// use itsatui::logic::reveal::{effect_for, RevealEffect, RevealKind};
///
/// assert_eq!(effect_for(RevealKind::Feature, 3), RevealEffect::FadeIn);
/// assert_eq!(effect_for(RevealKind::Card, 4), RevealEffect::SlideInLeft);
/// assert_eq!(effect_for(RevealKind::Card, 5), RevealEffect::SlideInRight);
/// ```
pub fn effect_for(kind: RevealKind, index: usize) -> RevealEffect {
    match kind {
        RevealKind::Feature | RevealKind::Timeline => RevealEffect::FadeIn,
        RevealKind::Card if index % 2 == 0 => RevealEffect::SlideInLeft,
        RevealKind::Card => RevealEffect::SlideInRight,
    }
}

/// Fraction of rows `[top, top + height)` inside `[view_top, view_top + view_height)`
///
/// # Examples
/// ```
/// use itsatui::logic::reveal::intersection_ratio;
///
/// assert_eq!(intersection_ratio(10, 4, 0, 12), 0.5);
/// assert_eq!(intersection_ratio(10, 4, 0, 5), 0.0);
/// assert_eq!(intersection_ratio(10, 4, 8, 20), 1.0);
/// ```
pub fn intersection_ratio(top: usize, height: usize, view_top: usize, view_height: usize) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / height as f32
}

/// Whether a block has come far enough into view to be revealed
pub fn should_reveal(top: usize, height: usize, scroll: usize, viewport_height: usize) -> bool {
    let view_height = viewport_height.saturating_sub(REVEAL_BOTTOM_MARGIN);
    intersection_ratio(top, height, scroll, view_height) >= REVEAL_THRESHOLD
}

/// Horizontal shift in columns for an entrance at `progress` in [0, 1]
///
/// Negative values clip from the left (entering from the left edge),
/// positive values indent (entering from the right).
pub fn reveal_shift(effect: RevealEffect, progress: f32) -> i16 {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * SLIDE_DISTANCE;
    match effect {
        RevealEffect::FadeIn => 0,
        RevealEffect::SlideInLeft => -(remaining.round() as i16),
        RevealEffect::SlideInRight => remaining.round() as i16,
    }
}

/// Whether an element is still faded at `progress`
pub fn is_faded(progress: f32) -> bool {
    progress < 0.5
}
