//! Classic mode: rounds until FINISH, one or two players.

use super::channels::{InputLine, PlayerCount};
use super::round::RoundEnd;
use super::score::ScoreBoard;
use super::{Game, ModeOutcome};
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
    pub fn play_classic(&mut self, count: PlayerCount) -> Result<ModeOutcome, B::Error> {
        let mut scores = ScoreBoard::new(count);
        uwriteln!(
            self.log.entry(LogType::Game),
            "CLASSIC mode. Press START to begin..."
        )
        .ok();

        if !self.wait_start()? {
            return Ok(ModeOutcome::Scores(scores));
        }

        let buttons = count.active_buttons();
        let mut round: u32 = 0;
        while !self.finish_requested()? {
            round = round.wrapping_add(1);
            match self.classic_round(round, buttons)? {
                RoundEnd::ModeSwitch => return Ok(ModeOutcome::ModeSwitch),
                RoundEnd::Completed(outcome) => scores.apply(&outcome),
            }
            uwriteln!(self.log.entry(LogType::Game), "score: {}", scores).ok();
        }

        Ok(ModeOutcome::Scores(scores))
    }

    /// Raw check of the start button.
    pub fn poll_start(&mut self) -> nb::Result<(), B::Error> {
        if self
            .board
            .is_active(InputLine::Start)
            .map_err(nb::Error::Other)?
        {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Sleeps between polls until START. `false` if FINISH came first.
    fn wait_start(&mut self) -> Result<bool, B::Error> {
        loop {
            match self.poll_start() {
                Ok(()) => return Ok(true),
                Err(nb::Error::Other(e)) => return Err(e),
                Err(nb::Error::WouldBlock) => {}
            }
            if self.finish_requested()? {
                return Ok(false);
            }
            self.delay.delay_ms(self.config.start_poll_ms);
        }
    }
}
