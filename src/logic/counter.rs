//! Hero counter and progress bar timing

use std::time::Duration;

/// Wait after the hero comes into view before counters start
pub const COUNTER_START_DELAY: Duration = Duration::from_millis(3500);

/// Time for a counter to run from zero to its target
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Wait after a progress bar comes into view before it fills
pub const BAR_FILL_DELAY: Duration = Duration::from_millis(500);

/// Progress bar fill animation length
pub const BAR_FILL_DURATION: Duration = Duration::from_millis(1500);

/// Counter value `elapsed` after it started: linear, rounded down
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use itsatui::logic::counter::counter_value;
///
/// assert_eq!(counter_value(250, Duration::ZERO), 0);
/// assert_eq!(counter_value(250, Duration::from_millis(1000)), 125);
/// assert_eq!(counter_value(250, Duration::from_secs(5)), 250);
/// ```
pub fn counter_value(target: u32, elapsed: Duration) -> u32 {
    if elapsed >= COUNTER_DURATION {
        return target;
    }
    let fraction = elapsed.as_millis() as u64 * target as u64 / COUNTER_DURATION.as_millis() as u64;
    fraction as u32
}
