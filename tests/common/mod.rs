//! Shared test infrastructure for segment-mux integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use segment_mux::{
    DIGIT_COUNT, DisplayLines, Hold, Level, Polarity, SEGMENT_COUNT, Segment, TimeDuration,
    TimeInstant, TimeSource,
};

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
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
    auto_step: u64,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            auto_step: 0,
        }
    }

    /// Time source that moves forward `step` milliseconds on every read
    pub fn stepping(step: u64) -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
            auto_step: step,
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn elapsed_since_start(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let now = self.current_time.get();
        self.current_time.set(TestInstant(now.0 + self.auto_step));
        now
    }
}

// ============================================================================
// Mock Hold
// ============================================================================

/// Hold that records every requested duration and advances a mock clock
pub struct MockHold<'t> {
    clock: &'t MockTimeSource,
    requests: heapless::Vec<TestDuration, 64>,
}

impl<'t> MockHold<'t> {
    pub fn new(clock: &'t MockTimeSource) -> Self {
        Self {
            clock,
            requests: heapless::Vec::new(),
        }
    }

    pub fn requests(&self) -> &[TestDuration] {
        &self.requests
    }
}

impl Hold<TestDuration> for MockHold<'_> {
    fn hold(&mut self, duration: TestDuration) {
        let _ = self.requests.push(duration);
        self.clock.advance(duration);
    }
}

// ============================================================================
// Mock Display Lines
// ============================================================================

/// A single write to an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    Segment(Segment, Level),
    Digit(usize, Level),
}

/// Mock output lines that track current levels and record every write
pub struct MockLines {
    segments: [Level; SEGMENT_COUNT],
    digits: [Level; DIGIT_COUNT],
    history: heapless::Vec<LineEvent, 512>,
}

impl MockLines {
    /// Lines in their power-on state (everything low)
    pub fn new() -> Self {
        Self {
            segments: [Level::Low; SEGMENT_COUNT],
            digits: [Level::Low; DIGIT_COUNT],
            history: heapless::Vec::new(),
        }
    }

    pub fn segment_levels(&self) -> [Level; SEGMENT_COUNT] {
        self.segments
    }

    pub fn digit_levels(&self) -> [Level; DIGIT_COUNT] {
        self.digits
    }

    pub fn history(&self) -> &[LineEvent] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl DisplayLines for MockLines {
    fn set_segment(&mut self, segment: Segment, level: Level) {
        self.segments[segment.index()] = level;
        let _ = self.history.push(LineEvent::Segment(segment, level));
    }

    fn set_digit(&mut self, digit: usize, level: Level) {
        self.digits[digit] = level;
        let _ = self.history.push(LineEvent::Digit(digit, level));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// A digit activation seen while replaying line history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub digit: usize,
    /// Segment levels at the moment the digit was selected
    pub segments: [Level; SEGMENT_COUNT],
}

/// Replays a line history and returns every digit activation in order.
///
/// Panics if two digits are ever selected at the same time.
pub fn collect_pulses(history: &[LineEvent], polarity: Polarity) -> heapless::Vec<Pulse, 64> {
    let active = polarity.digit_level(true);
    let mut segments = [polarity.segment_level(false); SEGMENT_COUNT];
    let mut selected: [bool; DIGIT_COUNT] = [false; DIGIT_COUNT];
    let mut pulses = heapless::Vec::new();

    for event in history {
        match *event {
            LineEvent::Segment(segment, level) => segments[segment.index()] = level,
            LineEvent::Digit(digit, level) => {
                let now_selected = level == active;
                if now_selected && !selected[digit] {
                    assert!(
                        selected.iter().all(|s| !s),
                        "digit {} selected while another digit is active",
                        digit
                    );
                    pulses.push(Pulse { digit, segments }).unwrap();
                }
                selected[digit] = now_selected;
            }
        }
    }

    pulses
}

/// Segment levels expected for a pattern under a polarity
pub fn expected_levels(pattern: &segment_mux::Pattern, polarity: Polarity) -> [Level; SEGMENT_COUNT] {
    let mut levels = [Level::Low; SEGMENT_COUNT];
    for segment in Segment::ALL {
        levels[segment.index()] = polarity.segment_level(pattern.is_lit(segment));
    }
    levels
}
