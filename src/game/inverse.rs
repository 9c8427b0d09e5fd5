//! Inverse mode: two of the three LEDs light up and the solo player must
//! press the button of the one that stayed dark.

use super::channels::{Output, OutputMask, Player, J1};
use super::round::Window;
use super::score::ScoreBoard;
use super::{Game, ModeOutcome, ModeSignal};
use crate::drivers::{Board, Chance, Clock};
use crate::logger::LogType;
use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uWrite, uwriteln};

enum Answer {
    Scored(i32),
    ModeSwitch,
}

/// Mask of every indicator except `dark`.
fn lit_mask(dark: usize) -> OutputMask {
    Output::INDICATORS
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != dark)
        .fold(OutputMask::NONE, |mask, (_, &led)| mask | led)
}

impl<B, C, D, R, W> Game<B, C, D, R, W>
where
    B: Board,
    C: Clock,
    D: DelayMs<u32>,
    R: Chance,
    W: uWrite,
{
    pub fn play_inverse(&mut self, rounds: u8) -> Result<ModeOutcome, B::Error> {
        let mut scores = ScoreBoard::solo();
        uwriteln!(
            self.log.entry(LogType::Game),
            "INVERSE mode (press the LED that stayed dark)"
        )
        .ok();

        for round in 1..=rounds {
            let dark = self.chance.pick(Output::INDICATORS.len());
            match self.inverse_round(dark)? {
                Answer::Scored(delta) => scores.adjust(Player::One, delta),
                Answer::ModeSwitch => {
                    uwriteln!(self.log.entry(LogType::Game), "mode change detected").ok();
                    return Ok(ModeOutcome::ModeSwitch);
                }
            }
            uwriteln!(
                self.log.entry(LogType::Game),
                "round {} points: {}",
                round,
                scores.get(Player::One)
            )
            .ok();
        }

        Ok(ModeOutcome::Scores(scores))
    }

    fn inverse_round(&mut self, dark: usize) -> Result<Answer, B::Error> {
        let lit = lit_mask(dark);
        self.board.all_off()?;
        self.board.activate(lit)?;
        let window = Window::open(self.clock.now_ms(), self.config.inverse_window_ms);

        let answer = self.await_answer(dark, window);
        self.board.deactivate(lit)?;
        answer
    }

    /// First press of any kind ends the round.
    fn await_answer(&mut self, dark: usize, window: Window) -> Result<Answer, B::Error> {
        while window.is_open(self.clock.now_ms()) {
            match self.poll_control()? {
                ModeSignal::Terminate => break,
                ModeSignal::ModeSwitch => return Ok(Answer::ModeSwitch),
                ModeSignal::Continue => {}
            }

            if self.press(J1[dark].into())? {
                return Ok(Answer::Scored(1));
            }
            for lit in (0..Output::INDICATORS.len()).filter(|&idx| idx != dark) {
                if self.press(J1[lit].into())? {
                    return Ok(Answer::Scored(-1));
                }
            }
        }
        Ok(Answer::Scored(0))
    }
}
