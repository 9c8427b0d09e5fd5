//! Host-side simulation of the game hardware.
//!
//! Time is virtual: delays advance it and every input sample costs one
//! millisecond, so polling loops make progress without real sleeps.

use crate::config::GameConfig;
use crate::drivers::{Board, Chance, Clock};
use crate::game::{Game, InputLine, OutputMask};
use crate::logger::Logger;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;
use ufmt::{uDisplay, uWrite, uwrite};

/// Simulations stop here instead of spinning forever.
const TIME_LIMIT_MS: u32 = 10 * 60 * 1000;

/// Console sink collecting everything written to it.
#[derive(Default, Debug)]
pub struct Transcript(String);

impl Transcript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn count(&self, needle: &str) -> usize {
        self.0.matches(needle).count()
    }
}

impl uWrite for Transcript {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

pub fn render<T: uDisplay>(value: &T) -> String {
    let mut out = Transcript::default();
    uwrite!(out, "{}", value).ok();
    out.0
}

/// Shared virtual millisecond counter. Serves as both clock and delay.
#[derive(Clone, Default, Debug)]
pub struct SimTime(Rc<Cell<u32>>);

impl SimTime {
    pub fn now(&self) -> u32 {
        self.0.get()
    }

    pub fn advance(&self, ms: u32) {
        let next = self.0.get().saturating_add(ms);
        assert!(
            next < TIME_LIMIT_MS,
            "simulation ran past {} ms",
            TIME_LIMIT_MS
        );
        self.0.set(next);
    }
}

impl Clock for SimTime {
    fn now_ms(&self) -> u32 {
        self.now()
    }
}

impl DelayMs<u32> for SimTime {
    fn delay_ms(&mut self, ms: u32) {
        self.advance(ms);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutputEvent {
    pub at: u32,
    pub on: bool,
    pub mask: OutputMask,
    /// Register contents before the write.
    pub before: u8,
}

/// Board whose inputs follow a script of held lines.
#[derive(Debug)]
pub struct SimBoard {
    time: SimTime,
    holds: Vec<(InputLine, u32, u32)>,
    register: u8,
    events: Vec<OutputEvent>,
    reads: Vec<(u32, InputLine)>,
}

impl SimBoard {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            holds: Vec::new(),
            register: 0,
            events: Vec::new(),
            reads: Vec::new(),
        }
    }

    /// Holds `line` high for `from <= t < until`.
    pub fn hold(&mut self, line: InputLine, from: u32, until: u32) {
        self.holds.push((line, from, until));
    }

    pub fn outputs(&self) -> OutputMask {
        OutputMask::from_bits(self.register)
    }

    pub fn activations(&self) -> Vec<OutputMask> {
        self.events
            .iter()
            .filter(|e| e.on)
            .map(|e| e.mask)
            .collect()
    }

    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    pub fn reads(&self) -> &[(u32, InputLine)] {
        &self.reads
    }

    pub fn last_change_at(&self) -> u32 {
        self.events.last().map(|e| e.at).unwrap_or(0)
    }

    pub fn dark_before_each_activation(&self) -> bool {
        self.events.iter().filter(|e| e.on).all(|e| e.before == 0)
    }

    fn record(&mut self, on: bool, mask: OutputMask) {
        let before = self.register;
        self.register = if on {
            before | mask.bits()
        } else {
            before & !mask.bits()
        };
        self.events.push(OutputEvent {
            at: self.time.now(),
            on,
            mask,
            before,
        });
    }
}

impl Board for SimBoard {
    type Error = Infallible;

    fn activate(&mut self, mask: OutputMask) -> Result<(), Infallible> {
        self.record(true, mask);
        Ok(())
    }

    fn deactivate(&mut self, mask: OutputMask) -> Result<(), Infallible> {
        self.record(false, mask);
        Ok(())
    }

    fn is_active(&mut self, line: InputLine) -> Result<bool, Infallible> {
        let now = self.time.now();
        self.reads.push((now, line));
        self.time.advance(1);
        Ok(self
            .holds
            .iter()
            .any(|&(l, from, until)| l == line && from <= now && now < until))
    }
}

/// Scripted random source. Falls back to index 0 and the lower bound once
/// the script runs out.
#[derive(Default, Debug)]
pub struct Script {
    picks: VecDeque<usize>,
    pauses: VecDeque<u32>,
}

impl Script {
    pub fn with_pick(mut self, index: usize) -> Self {
        self.picks.push_back(index);
        self
    }

    pub fn with_pause(mut self, ms: u32) -> Self {
        self.pauses.push_back(ms);
        self
    }
}

impl Chance for Script {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().unwrap_or(0);
        assert!(index < len, "scripted pick {} out of 0..{}", index, len);
        index
    }

    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        let value = self.pauses.pop_front().unwrap_or(lo);
        assert!(
            (lo..=hi).contains(&value),
            "scripted pause {} out of {}..={}",
            value,
            lo,
            hi
        );
        value
    }
}

pub type SimGame = Game<SimBoard, SimTime, SimTime, Script, Transcript>;

pub fn sim_game(script: Script, setup: impl FnOnce(&mut SimBoard)) -> SimGame {
    let time = SimTime::default();
    let mut board = SimBoard::new(time.clone());
    setup(&mut board);
    Game::new(
        board,
        time.clone(),
        time,
        script,
        Logger::new(Transcript::default()),
        GameConfig::default(),
    )
}
