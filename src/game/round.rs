//! Classic round engine.

use super::channels::{Button, Player, StimulusEntry, STIMULI};
use super::score::RoundOutcome;
use super::{Game, ModeSignal};
use crate::drivers::{Board, Chance, Clock};
use crate::logger::LogType;
use embedded_hal::blocking::delay::DelayMs;
use ufmt::{uWrite, uwriteln};

/// Response window measured from the moment the stimulus went on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    opened_at: u32,
    duration_ms: u32,
}

impl Window {
    pub const fn open(now_ms: u32, duration_ms: u32) -> Self {
        Self {
            opened_at: now_ms,
            duration_ms,
        }
    }

    #[inline]
    pub const fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.opened_at)
    }

    #[inline]
    pub const fn is_open(&self, now_ms: u32) -> bool {
        self.elapsed(now_ms) < self.duration_ms
    }
}

/// Presses collected during one round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    best: Option<(Player, u32)>,
    penalties: [i32; 2],
}

impl Tally {
    /// Records a correct press. Only a strictly faster hit replaces the
    /// current best, so on equal latency the earlier one keeps the round.
    pub fn hit(&mut self, player: Player, latency_ms: u32) -> bool {
        match self.best {
            Some((_, best)) if latency_ms >= best => false,
            _ => {
                self.best = Some((player, latency_ms));
                true
            }
        }
    }

    /// Every wrong press costs one point, winner or not.
    pub fn miss(&mut self, player: Player) {
        self.penalties[player.index()] -= 1;
    }

    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome {
            winner: self.best.map(|(player, _)| player),
            latency_ms: self.best.map(|(_, latency)| latency),
            penalties: self.penalties,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    Completed(RoundOutcome),
    ModeSwitch,
}

enum Response {
    Closed(Tally),
    ModeSwitch,
}

impl<B, C, D, R, W> Game<B, C, D, R, W>
where
    B: Board,
    C: Clock,
    D: DelayMs<u32>,
    R: Chance,
    W: uWrite,
{
    /// Plays one classic round over `buttons`, polled in the given order.
    ///
    /// The stimulus is switched off on every exit path, including a mode
    /// switch in the middle of the window.
    pub fn classic_round(&mut self, round: u32, buttons: &[Button]) -> Result<RoundEnd, B::Error> {
        self.board.all_off()?;
        let pause = self
            .chance
            .between(self.config.suspense_min_ms, self.config.suspense_max_ms);
        self.delay.delay_ms(pause);

        let stimulus = STIMULI[self.chance.pick(STIMULI.len())];
        self.board.activate(stimulus.mask())?;
        let window = Window::open(self.clock.now_ms(), self.config.classic_window_ms);
        if let Some(w) = self.log.debug() {
            uwriteln!(
                w,
                "round {}: stimulus mask {} after {} ms",
                round,
                stimulus.mask().bits(),
                pause
            )
            .ok();
        }

        let response = self.respond(&stimulus, buttons, window);
        self.board.deactivate(stimulus.mask())?;

        let tally = match response? {
            Response::Closed(tally) => tally,
            Response::ModeSwitch => {
                uwriteln!(self.log.entry(LogType::Game), "mode change detected").ok();
                return Ok(RoundEnd::ModeSwitch);
            }
        };

        let outcome = tally.outcome();
        match (outcome.winner, outcome.latency_ms) {
            (Some(winner), Some(latency)) => {
                uwriteln!(
                    self.log.entry(LogType::Game),
                    "round {}: {} wins in {} ms (+1)",
                    round,
                    winner,
                    latency
                )
                .ok();
            }
            _ => {
                uwriteln!(self.log.entry(LogType::Game), "round {}: nobody hit", round).ok();
            }
        }
        Ok(RoundEnd::Completed(outcome))
    }

    fn respond(
        &mut self,
        stimulus: &StimulusEntry,
        buttons: &[Button],
        window: Window,
    ) -> Result<Response, B::Error> {
        let mut tally = Tally::default();

        while window.is_open(self.clock.now_ms()) {
            match self.poll_control()? {
                ModeSignal::Terminate => break,
                ModeSignal::ModeSwitch => return Ok(Response::ModeSwitch),
                ModeSignal::Continue => {}
            }

            for &button in buttons {
                if !self.press(button.into())? {
                    continue;
                }
                let player = button.player;
                if button == stimulus.answer_for(player) {
                    let latency = window.elapsed(self.clock.now_ms());
                    tally.hit(player, latency);
                } else {
                    tally.miss(player);
                    uwriteln!(
                        self.log.entry(LogType::Game),
                        "{} wrong button (-1)",
                        player
                    )
                    .ok();
                }
            }
        }

        Ok(Response::Closed(tally))
    }
}
