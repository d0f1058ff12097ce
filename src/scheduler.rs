//! Timer scheduling
//!
//! A "run this after N ms" facility with cancellable handles. Timers carry
//! plain event values instead of callbacks: the owner pops due events and
//! dispatches them itself, so every state transition happens on one logical
//! timeline and can be driven by a manual clock in tests.
//!
//! - `Clock`: source of "now" (`SystemClock` for the terminal, `ManualClock` for tests)
//! - `Scheduler`: schedule/cancel/pop contract
//! - `TimerQueue`: the one implementation, ordered by (deadline, scheduling order)
//! - `Tick` + `advance`: step a manual clock from deadline to deadline

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time, measured from the clock's origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction time
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so several queues can be
/// advanced together.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Opaque handle returned by `Scheduler::schedule`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deferred-event facility
///
/// Events scheduled by the same caller with the same deadline fire in the
/// order they were scheduled.
pub trait Scheduler<E> {
    /// Current time of the underlying clock
    fn now(&self) -> Duration;

    /// Deliver `event` once `delay` has elapsed
    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle;

    /// Cancel a pending timer. Returns false if it already fired or was
    /// already cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Remove and return the earliest timer whose deadline has passed
    fn pop_due(&mut self) -> Option<E>;

    /// Deadline of the earliest pending timer
    fn next_deadline(&self) -> Option<Duration>;

    /// Number of pending timers
    fn pending(&self) -> usize;
}

/// Timer queue ordered by deadline, then by scheduling order
#[derive(Debug)]
pub struct TimerQueue<E, C> {
    clock: C,
    next_handle: u64,
    entries: BTreeMap<(Duration, TimerHandle), E>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl<E, C: Clock> TimerQueue<E, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_handle: 0,
            entries: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Whether `handle` is still waiting to fire
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Deadline of the earliest pending timer carrying `event`
    pub fn deadline_of(&self, event: &E) -> Option<Duration>
    where
        E: PartialEq,
    {
        self.entries
            .iter()
            .find(|(_, pending)| *pending == event)
            .map(|((deadline, _), _)| *deadline)
    }
}

impl<E, C: Clock> Scheduler<E> for TimerQueue<E, C> {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let deadline = self.clock.now() + delay;
        self.entries.insert((deadline, handle), event);
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.entries.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    fn pop_due(&mut self) -> Option<E> {
        let now = self.clock.now();
        let (&key, _) = self.entries.first_key_value()?;
        if key.0 > now {
            return None;
        }

        self.deadlines.remove(&key.1);
        self.entries.remove(&key)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    fn pending(&self) -> usize {
        self.entries.len()
    }
}

/// Something that owns timers and dispatches them when due
pub trait Tick {
    /// Earliest pending deadline across everything this owner schedules
    fn next_deadline(&self) -> Option<Duration>;

    /// Fire every timer that is due at the current clock time
    fn tick(&mut self);
}

/// Move `clock` forward by `by`, stopping at every intermediate deadline so
/// timers scheduled from inside a fired timer are measured from the moment
/// it fired rather than from the end of the jump.
pub fn advance<T: Tick + ?Sized>(target: &mut T, clock: &ManualClock, by: Duration) {
    let end = clock.now() + by;

    while let Some(deadline) = target.next_deadline() {
        if deadline > end {
            break;
        }
        if deadline > clock.now() {
            clock.set(deadline);
        }
        target.tick();
    }

    clock.set(end);
    target.tick();
}
