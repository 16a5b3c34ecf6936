//! Shared test infrastructure for repeat-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use repeat_button::{ButtonPin, Level, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    reads: Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            reads: Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }

    /// Current time in milliseconds, without counting as a read
    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }

    /// Number of times `now()` has been called
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.reads.set(self.reads.get() + 1);
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Line
// ============================================================================

/// Physical line state shared between a test and the pin owned by a button
pub struct MockLine {
    level: Cell<Level>,
    pull_up: Cell<bool>,
    reads: Cell<u32>,
}

impl MockLine {
    pub fn new(level: Level) -> Self {
        Self {
            level: Cell::new(level),
            pull_up: Cell::new(false),
            reads: Cell::new(0),
        }
    }

    pub fn press(&self) {
        self.level.set(Level::Low);
    }

    pub fn release(&self) {
        self.level.set(Level::High);
    }

    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn pull_up_enabled(&self) -> bool {
        self.pull_up.get()
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }
}

/// Pin handle borrowing a [`MockLine`]
pub struct MockPin<'a> {
    line: &'a MockLine,
}

impl ButtonPin for MockPin<'_> {
    fn configure_pull_up(&mut self) {
        self.line.pull_up.set(true);
    }

    fn level(&mut self) -> Level {
        self.line.reads.set(self.line.reads.get() + 1);
        self.line.level.get()
    }
}

/// Pin that replays a fixed sequence of levels, holding the last one forever
pub struct ScriptedPin {
    levels: heapless::Deque<Level, 32>,
    last: Level,
}

impl ScriptedPin {
    pub fn new(levels: &[Level]) -> Self {
        let mut queue = heapless::Deque::new();
        for level in levels {
            queue.push_back(*level).unwrap();
        }
        Self {
            levels: queue,
            last: Level::High,
        }
    }

    pub fn remaining(&self) -> usize {
        self.levels.len()
    }
}

impl ButtonPin for ScriptedPin {
    fn configure_pull_up(&mut self) {}

    fn level(&mut self) -> Level {
        if let Some(level) = self.levels.pop_front() {
            self.last = level;
        }
        self.last
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub use repeat_button::Level::{High as HIGH, Low as LOW};

/// Polls the button once per millisecond for `millis` milliseconds, counting events
pub fn poll_for<P: ButtonPin>(
    button: &mut repeat_button::Button<'_, TestInstant, P, MockTimeSource>,
    timer: &MockTimeSource,
    millis: u64,
) -> usize {
    let mut events = 0;
    for _ in 0..millis {
        timer.advance(1);
        if button.poll() {
            events += 1;
        }
    }
    events
}
