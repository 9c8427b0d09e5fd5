//! Session driver: alternates between the two modes until FINISH.

use super::channels::PlayerCount;
use super::score::ScoreBoard;
use super::{Game, GameMode, ModeOutcome};
use crate::drivers::{Board, Chance, Clock};
use crate::logger::LogType;
use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uWrite, uwriteln};

impl<B, C, D, R, W> Game<B, C, D, R, W>
where
    B: Board,
    C: Clock,
    D: DelayMs<u32>,
    R: Chance,
    W: uWrite,
{
    /// Runs controllers until FINISH and returns the last reported scores.
    ///
    /// A mode switch flips the mode without reporting. Every completed
    /// controller run is reported as partial results.
    pub fn run_session(&mut self, count: PlayerCount) -> Result<Option<ScoreBoard>, B::Error> {
        uwriteln!(
            self.log.entry(LogType::System),
            "START = begin | FINISH = end | MODE = switch mode"
        )
        .ok();

        let mut last = None;
        while !self.finish_requested()? {
            let outcome = match self.mode {
                GameMode::Classic => self.play_classic(count)?,
                GameMode::Inverse => self.play_inverse(self.config.inverse_session_rounds)?,
            };

            match outcome {
                ModeOutcome::ModeSwitch => {
                    self.mode = self.mode.toggled();
                    uwriteln!(self.log.entry(LogType::Game), "switched to {}", self.mode).ok();
                }
                ModeOutcome::Scores(scores) => {
                    uwriteln!(self.log.entry(LogType::Game), "partial results: {}", scores).ok();
                    last = Some(scores);
                }
            }
        }

        match &last {
            Some(scores) => {
                uwriteln!(
                    self.log.entry(LogType::Game),
                    "game over. final results: {}",
                    scores
                )
                .ok();
            }
            None => {
                uwriteln!(self.log.entry(LogType::Game), "game over. no results").ok();
            }
        }
        Ok(last)
    }
}
