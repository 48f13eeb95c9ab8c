//! Shared test infrastructure for mirror-doorbell integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use heapless::Deque;
use mirror_doorbell::{
    LedStrip, Rgbw, SerialRx, TOTAL_LEDS, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing (microseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

/// Shorthand for an instant `ms` milliseconds after boot.
pub fn at_ms(ms: u64) -> TestInstant {
    TestInstant(ms * 1_000)
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of microseconds
    pub fn advance_us(&self, micros: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + micros));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock strip that keeps the last shown frame
pub struct MockStrip {
    pending: [Rgbw; TOTAL_LEDS],
    shown: [Rgbw; TOTAL_LEDS],
    brightness: u8,
    show_count: u32,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            pending: [Rgbw::default(); TOTAL_LEDS],
            shown: [Rgbw::default(); TOTAL_LEDS],
            brightness: 255,
            show_count: 0,
        }
    }

    /// Pixels as of the last `show()`.
    pub fn shown(&self) -> &[Rgbw] {
        &self.shown
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn show_count(&self) -> u32 {
        self.show_count
    }
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        self.pending[index] = color;
    }

    fn show(&mut self) {
        self.shown = self.pending;
        self.show_count += 1;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn num_pixels(&self) -> usize {
        TOTAL_LEDS
    }
}

// ============================================================================
// Mock Pins, Serial and Delay
// ============================================================================

/// Active-low button; `press()` pulls the pin low
pub struct MockButton {
    pressed: bool,
}

impl MockButton {
    pub fn new() -> Self {
        Self { pressed: false }
    }

    pub fn press(&mut self) {
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }
}

impl ErrorType for MockButton {
    type Error = Infallible;
}

impl InputPin for MockButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed)
    }
}

/// Output pin that counts level changes
pub struct MockLed {
    high: bool,
    toggles: u32,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            high: false,
            toggles: 0,
        }
    }

    pub fn is_on(&self) -> bool {
        self.high
    }

    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    fn set(&mut self, high: bool) {
        if high != self.high {
            self.toggles += 1;
        }
        self.high = high;
    }
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for MockLed {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Serial receiver fed from a queue, one byte per read
pub struct MockSerial {
    rx: Deque<u8, 64>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self { rx: Deque::new() }
    }

    pub fn send(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.rx.push_back(*byte).expect("mock serial queue full");
        }
    }

    pub fn pending(&self) -> usize {
        self.rx.len()
    }
}

impl SerialRx for MockSerial {
    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}

/// Delay that only counts how often it was asked to wait
pub struct MockDelay {
    calls: u32,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { calls: 0 }
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Feed a whole line to a doorbell, byte by byte, at one instant
pub fn send_line(
    doorbell: &mut mirror_doorbell::Doorbell<TestInstant>,
    line: &[u8],
    now: TestInstant,
) {
    for byte in line {
        doorbell.receive_byte(*byte, now);
    }
}

/// Trail brightness comparison with floating-point tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}
