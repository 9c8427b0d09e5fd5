//! Reflex duel game logic.
//!
//! [`Game`] owns every collaborator the control loop touches: the board,
//! the clock, a blocking delay, the random source and the console. The round
//! engine and both mode controllers are `impl` blocks on it, split over the
//! submodules, and the session driver ties them together.

pub mod channels;
pub mod classic;
pub mod inverse;
pub mod round;
pub mod score;
pub mod session;

pub use channels::{
    Button, InputLine, Output, OutputMask, Player, PlayerCount, StimulusEntry, BUTTONS, J1, J2,
    SLOTS, STIMULI,
};
pub use round::{RoundEnd, Tally, Window};
pub use score::{RoundOutcome, ScoreBoard};

use crate::config::GameConfig;
use crate::drivers::{Board, Chance, Clock, Debouncer};
use crate::logger::Logger;
use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uDisplay, uWrite, Formatter};

/// Control value sampled once per poll iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeSignal {
    Continue,
    ModeSwitch,
    Terminate,
}

/// What a mode controller hands back to the session driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeOutcome {
    Scores(ScoreBoard),
    ModeSwitch,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    Classic,
    Inverse,
}

impl GameMode {
    pub const fn toggled(self) -> Self {
        match self {
            GameMode::Classic => GameMode::Inverse,
            GameMode::Inverse => GameMode::Classic,
        }
    }
}

impl uDisplay for GameMode {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            GameMode::Classic => "CLASSIC",
            GameMode::Inverse => "INVERSE",
        })
    }
}

pub struct Game<B, C, D, R, W> {
    board: B,
    clock: C,
    delay: D,
    chance: R,
    log: Logger<W>,
    debouncer: Debouncer,
    config: GameConfig,
    mode: GameMode,
}

impl<B, C, D, R, W> Game<B, C, D, R, W>
where
    B: Board,
    C: Clock,
    D: DelayMs<u32>,
    R: Chance,
    W: uWrite,
{
    pub fn new(
        board: B,
        clock: C,
        delay: D,
        chance: R,
        log: Logger<W>,
        config: GameConfig,
    ) -> Self {
        Self {
            board,
            clock,
            delay,
            chance,
            log,
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            mode: GameMode::default(),
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn log(&self) -> &Logger<W> {
        &self.log
    }

    /// Mode the session driver runs next.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    fn press(&mut self, line: InputLine) -> Result<bool, B::Error> {
        self.debouncer
            .read_press(&mut self.board, &mut self.delay, line)
    }

    /// Coarse, undebounced check of the finish line.
    pub fn finish_requested(&mut self) -> Result<bool, B::Error> {
        self.board.is_active(InputLine::Finish)
    }

    /// Finish is checked raw first, then the mode button with debounce.
    pub fn poll_control(&mut self) -> Result<ModeSignal, B::Error> {
        if self.finish_requested()? {
            return Ok(ModeSignal::Terminate);
        }
        if self.press(InputLine::Mode)? {
            return Ok(ModeSignal::ModeSwitch);
        }
        Ok(ModeSignal::Continue)
    }
}
