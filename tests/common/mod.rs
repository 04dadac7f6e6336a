#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chainpulse::{ChainOutput, Rgb};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use rand_core::RngCore;

/// One observable action on the 2-wire bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Clock(bool),
    Data(bool),
    DelayUs(u32),
}

pub type BusLog = Rc<RefCell<Vec<BusEvent>>>;

#[derive(Clone, Copy)]
enum Line {
    Clock,
    Data,
}

/// Output pin double that appends every level change to a shared log.
pub struct LinePin {
    line: Line,
    log: BusLog,
}

impl LinePin {
    fn record(&mut self, level: bool) {
        let event = match self.line {
            Line::Clock => BusEvent::Clock(level),
            Line::Data => BusEvent::Data(level),
        };
        self.log.borrow_mut().push(event);
    }
}

impl ErrorType for LinePin {
    type Error = Infallible;
}

impl OutputPin for LinePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(true);
        Ok(())
    }
}

/// Delay double that logs requested waits instead of blocking.
pub struct LogDelay {
    log: BusLog,
}

impl DelayNs for LogDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(BusEvent::DelayUs(ns / 1000));
    }
}

/// A recorded clock pin, data pin and delay sharing one event log.
pub fn bus() -> (LinePin, LinePin, LogDelay, BusLog) {
    let log: BusLog = Rc::new(RefCell::new(Vec::new()));
    let clock = LinePin {
        line: Line::Clock,
        log: Rc::clone(&log),
    };
    let data = LinePin {
        line: Line::Data,
        log: Rc::clone(&log),
    };
    let delay = LogDelay {
        log: Rc::clone(&log),
    };
    (clock, data, delay, log)
}

/// Expected bus events for one broadcast frame of `color` over `leds` slots.
///
/// Derived from the wire convention directly: per byte the first bit is
/// always low, then bits 7 down to 1; bit 0 never appears. Every bit is
/// data, 10 us, clock high, 10 us, clock low; the frame ends with the
/// 501 us latch hold.
pub fn frame_events(color: Rgb, leds: usize) -> Vec<BusEvent> {
    let mut events = Vec::new();
    for _ in 0..leds {
        for byte in [color.r, color.g, color.b] {
            let mut bits = vec![false];
            for position in (1..8).rev() {
                bits.push(byte >> position & 1 == 1);
            }
            for bit in bits {
                events.push(BusEvent::Data(bit));
                events.push(BusEvent::DelayUs(10));
                events.push(BusEvent::Clock(true));
                events.push(BusEvent::DelayUs(10));
                events.push(BusEvent::Clock(false));
            }
        }
    }
    events.push(BusEvent::DelayUs(501));
    events
}

/// Delay double for animation tests where pacing is irrelevant.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Chain output double that keeps every emitted color.
#[derive(Default)]
pub struct RecordingChain {
    pub colors: Vec<Rgb>,
}

impl ChainOutput for RecordingChain {
    type Error = Infallible;

    fn write(&mut self, color: Rgb) -> Result<(), Infallible> {
        self.colors.push(color);
        Ok(())
    }
}

/// RNG double replaying a fixed script of words.
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.values.pop_front().expect("RNG script exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
